// Asset Query Operations
// Read-only lookups. These never fail and have no side effects.

use primitive_types::U256;

use crate::crypto::Address;

use super::AssetStorage;

/// Current owner of an asset (`None` for a never-minted id)
pub fn owner_of<S: AssetStorage + ?Sized>(storage: &S, token_id: u64) -> Option<Address> {
    storage.get_asset(token_id).map(|asset| asset.owner)
}

/// Number of assets held by an owner
pub fn balance_of<S: AssetStorage + ?Sized>(storage: &S, owner: &Address) -> u64 {
    storage.get_balance(owner)
}

/// Approved spender for an asset (`None` if unset or never minted)
pub fn get_approved<S: AssetStorage + ?Sized>(storage: &S, token_id: u64) -> Option<Address> {
    storage.get_asset(token_id).and_then(|asset| asset.approved)
}

/// Whether `operator` may move all of `owner`'s assets
pub fn is_approved_for_all<S: AssetStorage + ?Sized>(
    storage: &S,
    owner: &Address,
    operator: &Address,
) -> bool {
    storage.is_approved_for_all(owner, operator)
}

/// Listing price of an asset (zero when unlisted or never minted)
pub fn price_of<S: AssetStorage + ?Sized>(storage: &S, token_id: u64) -> U256 {
    storage
        .get_asset(token_id)
        .map(|asset| asset.price)
        .unwrap_or_default()
}

/// Number of assets minted so far (also the next id to be assigned)
pub fn total_minted<S: AssetStorage + ?Sized>(storage: &S) -> u64 {
    storage.total_minted()
}
