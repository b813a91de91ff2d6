// Asset Listing Operation

use log::debug;
use primitive_types::U256;

use crate::asset::AssetResult;
use crate::context::RuntimeContext;

use super::{get_owned_asset, AssetStorage};

/// Put an asset up for sale at `price` coin base units (owner only).
/// A price of zero delists the asset.
pub fn set_price<S: AssetStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    token_id: u64,
    price: U256,
) -> AssetResult<()> {
    let mut asset = get_owned_asset(storage, token_id, &ctx.caller)?;

    asset.price = price;
    storage.set_asset(&asset)?;

    debug!("asset {} listed at {}", token_id, price);
    Ok(())
}
