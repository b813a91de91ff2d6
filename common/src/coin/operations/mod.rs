// Coin Ledger Operations
// This module contains the core business logic for coin operations.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via traits
// - Caller identity is passed in through the runtime context
// - This allows testing and reuse across different runtime environments

mod approve;
mod query;
mod supply;
mod transfer;
mod validation;

pub use approve::*;
pub use query::*;
pub use supply::*;
pub use transfer::*;
pub use validation::*;

use primitive_types::U256;

use crate::coin::{CoinError, CoinEvent, CoinMetadata, CoinResult};
use crate::crypto::Address;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for coin ledger operations
/// Runtime implementations provide concrete storage backends
pub trait CoinStorage {
    // Ledger-level state
    fn metadata(&self) -> &CoinMetadata;
    /// The single account permitted to mint and burn supply
    fn authority(&self) -> Address;
    fn total_supply(&self) -> U256;
    fn set_total_supply(&mut self, supply: U256) -> CoinResult<()>;

    // Balance operations
    fn balance(&self, account: &Address) -> U256;
    fn set_balance(&mut self, account: &Address, amount: U256) -> CoinResult<()>;

    // Allowance operations
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;
    fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: U256)
        -> CoinResult<()>;

    // Observable log records
    fn append_event(&mut self, event: CoinEvent);
}

// ========================================
// Balance Movement Utility
// ========================================

/// Move `amount` from one account to another.
/// Both balances are read and checked before either is written, so a failure
/// leaves the ledger untouched. A self-move is a no-op.
fn move_balance<S: CoinStorage + ?Sized>(
    storage: &mut S,
    from: &Address,
    to: &Address,
    amount: U256,
) -> CoinResult<()> {
    if from == to {
        return Ok(());
    }

    let debited = storage
        .balance(from)
        .checked_sub(amount)
        .ok_or(CoinError::InsufficientBalance)?;
    let credited = storage
        .balance(to)
        .checked_add(amount)
        .ok_or(CoinError::Overflow)?;

    storage.set_balance(from, debited)?;
    storage.set_balance(to, credited)?;

    Ok(())
}
