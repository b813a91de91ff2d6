// In-Memory Coin Store
// Default storage backend for the coin ledger. All state lives in ordered
// maps so iteration (and therefore invariant checks) stays deterministic.

use indexmap::IndexMap;
use primitive_types::U256;

use crate::crypto::Address;

use super::operations::CoinStorage;
use super::{genesis_supply, CoinEvent, CoinMetadata, CoinResult};

/// In-memory coin ledger state.
///
/// Construction performs the genesis assignment: the whole initial supply is
/// credited to the deployer, which also becomes the mint/burn authority.
#[derive(Clone, Debug)]
pub struct MemoryCoinStore {
    metadata: CoinMetadata,
    authority: Address,
    total_supply: U256,
    balances: IndexMap<Address, U256>,
    allowances: IndexMap<(Address, Address), U256>,
    events: Vec<CoinEvent>,
}

impl MemoryCoinStore {
    /// Create a ledger with the genesis supply credited to `deployer`
    pub fn new(metadata: CoinMetadata, deployer: Address) -> Self {
        let supply = genesis_supply();
        let mut balances = IndexMap::new();
        balances.insert(deployer, supply);

        Self {
            metadata,
            authority: deployer,
            total_supply: supply,
            balances,
            allowances: IndexMap::new(),
            events: vec![CoinEvent::Transfer {
                from: None,
                to: Some(deployer),
                amount: supply,
            }],
        }
    }

    /// Observable log records, oldest first
    pub fn events(&self) -> &[CoinEvent] {
        &self.events
    }

    /// Iterate over all accounts that ever held a balance
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }
}

impl CoinStorage for MemoryCoinStore {
    fn metadata(&self) -> &CoinMetadata {
        &self.metadata
    }

    fn authority(&self) -> Address {
        self.authority
    }

    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: U256) -> CoinResult<()> {
        self.total_supply = supply;
        Ok(())
    }

    fn balance(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: &Address, amount: U256) -> CoinResult<()> {
        self.balances.insert(*account, amount);
        Ok(())
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: U256) -> CoinResult<()> {
        self.allowances.insert((*owner, *spender), amount);
        Ok(())
    }

    fn append_event(&mut self, event: CoinEvent) {
        self.events.push(event);
    }
}
