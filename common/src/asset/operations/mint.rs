// Asset Mint Operation

use log::debug;

use crate::asset::{Asset, AssetEvent, AssetResult};
use crate::context::RuntimeContext;
use crate::crypto::Address;

use super::AssetStorage;

/// Mint a new asset to the caller
///
/// Ids are sequential and never reused; there is no supply cap. The fresh
/// asset starts unapproved and unlisted.
///
/// # Returns
/// - `Ok(u64)`: The new asset id
/// - `Err(AssetError)`: Only on id-counter exhaustion
pub fn mint<S: AssetStorage + ?Sized>(storage: &mut S, ctx: &RuntimeContext) -> AssetResult<u64> {
    let token_id = storage.allocate_token_id()?;

    let asset = Asset::new(token_id, ctx.caller);
    storage.set_asset(&asset)?;
    storage.increment_balance(&ctx.caller)?;
    storage.append_event(AssetEvent::Transfer {
        from: None,
        to: ctx.caller,
        token_id,
    });

    debug!("minted asset {} to {}", token_id, ctx.caller);
    Ok(token_id)
}
