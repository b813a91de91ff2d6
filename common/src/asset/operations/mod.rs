// Asset Registry Operations
// This module contains the core business logic for asset operations.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via traits
// - Caller identity is passed in through the runtime context
// - The receiver-capability probe used by safe transfers is an external
//   collaborator behind its own trait

mod approve;
mod exchange;
mod listing;
mod mint;
mod query;
mod transfer;
mod validation;

pub use approve::*;
pub use exchange::*;
pub use listing::*;
pub use mint::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use crate::asset::{Asset, AssetError, AssetEvent, AssetResult};
use crate::crypto::Address;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for asset registry operations
/// Runtime implementations provide concrete storage backends
pub trait AssetStorage {
    // Asset records
    fn get_asset(&self, token_id: u64) -> Option<Asset>;
    fn set_asset(&mut self, asset: &Asset) -> AssetResult<()>;

    // Per-owner counts
    fn get_balance(&self, owner: &Address) -> u64;
    fn increment_balance(&mut self, owner: &Address) -> AssetResult<u64>;
    fn decrement_balance(&mut self, owner: &Address) -> AssetResult<u64>;

    // Operator approval operations
    fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool;
    fn set_approval_for_all(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
    ) -> AssetResult<()>;

    // Id allocation
    fn total_minted(&self) -> u64;
    fn allocate_token_id(&mut self) -> AssetResult<u64>;

    /// The registry's own account on the coin ledger: buyers approve this
    /// address as a spender before calling the exchange
    fn settlement_address(&self) -> Address;

    // Observable log records
    fn append_event(&mut self, event: AssetEvent);
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check if the caller has permission to move an asset
/// Returns Ok(()) if authorized, Err otherwise
pub fn check_asset_permission<S: AssetStorage + ?Sized>(
    storage: &S,
    asset: &Asset,
    caller: &Address,
) -> AssetResult<()> {
    // Owner always has permission
    if asset.owner == *caller {
        return Ok(());
    }

    // Single-spender approval
    if asset.approved.as_ref() == Some(caller) {
        return Ok(());
    }

    // Blanket operator approval
    if storage.is_approved_for_all(&asset.owner, caller) {
        return Ok(());
    }

    Err(AssetError::NotAuthorized)
}

/// Fetch an asset and check that `holder` currently owns it.
/// An id that was never minted reports `NotOwner` as well: nobody owns it.
fn get_owned_asset<S: AssetStorage + ?Sized>(
    storage: &S,
    token_id: u64,
    holder: &Address,
) -> AssetResult<Asset> {
    let asset = storage.get_asset(token_id).ok_or(AssetError::NotOwner)?;
    if asset.owner != *holder {
        return Err(AssetError::NotOwner);
    }
    Ok(asset)
}
