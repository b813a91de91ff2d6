// In-Memory Asset Store
// Default storage backend for the asset registry.

use indexmap::IndexMap;

use crate::crypto::Address;

use super::operations::AssetStorage;
use super::{Asset, AssetError, AssetEvent, AssetResult};

/// In-memory asset registry state.
///
/// The registry is bound at construction to the coin-ledger account buyers
/// must approve as a spender (its settlement address).
#[derive(Clone, Debug)]
pub struct MemoryAssetStore {
    settlement: Address,
    next_token_id: u64,
    assets: IndexMap<u64, Asset>,
    balances: IndexMap<Address, u64>,
    operator_approvals: IndexMap<(Address, Address), bool>,
    events: Vec<AssetEvent>,
}

impl MemoryAssetStore {
    /// Create an empty registry settling through `settlement`
    pub fn new(settlement: Address) -> Self {
        Self {
            settlement,
            next_token_id: 0,
            assets: IndexMap::new(),
            balances: IndexMap::new(),
            operator_approvals: IndexMap::new(),
            events: Vec::new(),
        }
    }

    /// Observable log records, oldest first
    pub fn events(&self) -> &[AssetEvent] {
        &self.events
    }

    /// Iterate over all minted assets in id order
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }
}

impl AssetStorage for MemoryAssetStore {
    fn get_asset(&self, token_id: u64) -> Option<Asset> {
        self.assets.get(&token_id).cloned()
    }

    fn set_asset(&mut self, asset: &Asset) -> AssetResult<()> {
        self.assets.insert(asset.token_id, asset.clone());
        Ok(())
    }

    fn get_balance(&self, owner: &Address) -> u64 {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn increment_balance(&mut self, owner: &Address) -> AssetResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_add(1).ok_or(AssetError::Overflow)?;
        Ok(*balance)
    }

    fn decrement_balance(&mut self, owner: &Address) -> AssetResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(AssetError::Overflow)?;
        Ok(*balance)
    }

    fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        self.operator_approvals
            .get(&(*owner, *operator))
            .copied()
            .unwrap_or_default()
    }

    fn set_approval_for_all(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> AssetResult<()> {
        self.operator_approvals.insert((*owner, *operator), approved);
        Ok(())
    }

    fn total_minted(&self) -> u64 {
        self.next_token_id
    }

    fn allocate_token_id(&mut self) -> AssetResult<u64> {
        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or(AssetError::Overflow)?;
        Ok(token_id)
    }

    fn settlement_address(&self) -> Address {
        self.settlement
    }

    fn append_event(&mut self, event: AssetEvent) {
        self.events.push(event);
    }
}
