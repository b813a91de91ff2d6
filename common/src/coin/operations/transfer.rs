// Coin Transfer Operations
// This module contains the transfer and delegated-transfer operation logic.

use log::debug;
use primitive_types::U256;

use crate::coin::{CoinError, CoinEvent, CoinResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::validation::validate_account;
use super::{move_balance, CoinStorage};

/// Transfer coins from the caller to another account
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller)
/// - `to`: Recipient address
/// - `amount`: Amount to move, in base units
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(CoinError)`: Error code
pub fn transfer<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: &Address,
    amount: U256,
) -> CoinResult<()> {
    validate_account(to)?;

    if amount > storage.balance(&ctx.caller) {
        return Err(CoinError::InsufficientBalance);
    }

    move_balance(storage, &ctx.caller, to, amount)?;
    storage.append_event(CoinEvent::Transfer {
        from: Some(ctx.caller),
        to: Some(*to),
        amount,
    });

    debug!("coin transfer of {} from {} to {}", amount, ctx.caller, to);
    Ok(())
}

/// Delegated transfer: the caller spends from another account's balance
///
/// When the caller is the source account itself no allowance is required or
/// consumed; otherwise `allowance[from][caller]` must cover the amount and is
/// decremented by it.
///
/// The four checks (zero address, same party, balance, allowance) are each
/// independently triggerable; the balance check runs before the allowance
/// check.
pub fn transfer_from<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    amount: U256,
) -> CoinResult<()> {
    validate_account(from)?;
    validate_account(to)?;

    if from == to {
        return Err(CoinError::SameParty);
    }

    if amount > storage.balance(from) {
        return Err(CoinError::InsufficientBalance);
    }

    let delegated = ctx.caller != *from;
    let remaining = if delegated {
        let allowance = storage.allowance(from, &ctx.caller);
        Some(
            allowance
                .checked_sub(amount)
                .ok_or(CoinError::NotAuthorized)?,
        )
    } else {
        None
    };

    move_balance(storage, from, to, amount)?;
    if let Some(remaining) = remaining {
        storage.set_allowance(from, &ctx.caller, remaining)?;
    }
    storage.append_event(CoinEvent::Transfer {
        from: Some(*from),
        to: Some(*to),
        amount,
    });

    debug!(
        "coin transfer of {} from {} to {} (spender {})",
        amount, from, to, ctx.caller
    );
    Ok(())
}
