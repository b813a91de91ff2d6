// Coin Approval Operation

use log::debug;
use primitive_types::U256;

use crate::coin::{CoinError, CoinEvent, CoinResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::CoinStorage;

/// Authorize a spender to move up to `amount` from the caller's balance.
///
/// The allowance is overwritten, not accumulated: approving the same amount
/// twice leaves the ledger in the same state.
pub fn approve<S: CoinStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    spender: &Address,
    amount: U256,
) -> CoinResult<()> {
    if *spender == ctx.caller {
        return Err(CoinError::SelfApproval);
    }

    storage.set_allowance(&ctx.caller, spender, amount)?;
    storage.append_event(CoinEvent::Approval {
        owner: ctx.caller,
        spender: *spender,
        amount,
    });

    debug!("coin approval of {} from {} to {}", amount, ctx.caller, spender);
    Ok(())
}
