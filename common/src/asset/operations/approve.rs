// Asset Approval Operations
// Single-spender approval and blanket operator approval.

use log::debug;

use crate::asset::{AssetEvent, AssetResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::validation::validate_recipient;
use super::{get_owned_asset, AssetStorage};

/// Approve a single spender for one asset (owner only)
pub fn approve<S: AssetStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: &Address,
    token_id: u64,
) -> AssetResult<()> {
    validate_recipient(to)?;
    let mut asset = get_owned_asset(storage, token_id, &ctx.caller)?;

    asset.approved = Some(*to);
    storage.set_asset(&asset)?;
    storage.append_event(AssetEvent::Approval {
        owner: ctx.caller,
        approved: *to,
        token_id,
    });

    debug!("asset {} approved for {}", token_id, to);
    Ok(())
}

/// Grant or revoke an operator over all of the caller's assets.
///
/// The emitted record carries the newly-set flag.
pub fn set_approval_for_all<S: AssetStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    operator: &Address,
    approved: bool,
) -> AssetResult<()> {
    validate_recipient(operator)?;

    storage.set_approval_for_all(&ctx.caller, operator, approved)?;
    storage.append_event(AssetEvent::ApprovalForAll {
        owner: ctx.caller,
        operator: *operator,
        approved,
    });

    debug!(
        "operator {} {} for all assets of {}",
        operator,
        if approved { "approved" } else { "revoked" },
        ctx.caller
    );
    Ok(())
}
