// Coin Supply Operations
// Authority-gated mint/burn, plus the allowance-gated burn_from path.

use log::debug;
use primitive_types::U256;

use crate::coin::{CoinError, CoinEvent, CoinResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::validation::validate_account;
use super::CoinStorage;

/// Mint new coins to an account (authority only)
pub fn mint<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: &Address,
    amount: U256,
) -> CoinResult<()> {
    if ctx.caller != storage.authority() {
        return Err(CoinError::NotAuthorized);
    }
    validate_account(to)?;

    let supply = storage
        .total_supply()
        .checked_add(amount)
        .ok_or(CoinError::Overflow)?;
    let credited = storage
        .balance(to)
        .checked_add(amount)
        .ok_or(CoinError::Overflow)?;

    storage.set_total_supply(supply)?;
    storage.set_balance(to, credited)?;
    storage.append_event(CoinEvent::Transfer {
        from: None,
        to: Some(*to),
        amount,
    });

    debug!("minted {} coins to {}", amount, to);
    Ok(())
}

/// Burn coins from an account (authority only)
pub fn burn<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    amount: U256,
) -> CoinResult<()> {
    if ctx.caller != storage.authority() {
        return Err(CoinError::NotAuthorized);
    }

    let debited = storage
        .balance(from)
        .checked_sub(amount)
        .ok_or(CoinError::InsufficientBalance)?;
    // The supply always covers any single balance, so this can not underflow
    let supply = storage
        .total_supply()
        .checked_sub(amount)
        .ok_or(CoinError::Overflow)?;

    storage.set_balance(from, debited)?;
    storage.set_total_supply(supply)?;
    storage.append_event(CoinEvent::Transfer {
        from: Some(*from),
        to: None,
        amount,
    });

    debug!("burned {} coins from {}", amount, from);
    Ok(())
}

/// Burn coins from another account against the caller's allowance.
///
/// Unlike `burn` this path is open to any spender the owner has approved;
/// the allowance check runs before the balance check.
pub fn burn_from<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    amount: U256,
) -> CoinResult<()> {
    validate_account(from)?;

    let remaining = storage
        .allowance(from, &ctx.caller)
        .checked_sub(amount)
        .ok_or(CoinError::NotAuthorized)?;
    let debited = storage
        .balance(from)
        .checked_sub(amount)
        .ok_or(CoinError::InsufficientBalance)?;
    let supply = storage
        .total_supply()
        .checked_sub(amount)
        .ok_or(CoinError::Overflow)?;

    storage.set_balance(from, debited)?;
    storage.set_allowance(from, &ctx.caller, remaining)?;
    storage.set_total_supply(supply)?;
    storage.append_event(CoinEvent::Transfer {
        from: Some(*from),
        to: None,
        amount,
    });

    debug!("burned {} coins from {} (spender {})", amount, from, ctx.caller);
    Ok(())
}
