// Exchange Operation
// Settles a listed asset against the coin ledger: the listed price moves
// from buyer to owner, the asset moves from owner to buyer, atomically.

use log::debug;
use primitive_types::U256;

use crate::asset::{AssetError, AssetResult};
use crate::coin::{self, CoinStorage};
use crate::context::RuntimeContext;

use super::transfer::apply_transfer;
use super::AssetStorage;

/// Buy a listed asset, paying its price in coins (caller = buyer)
///
/// The buyer must have approved the registry's settlement address as a coin
/// spender for at least the listing price. The payment runs first: if the
/// coin leg fails, its error propagates unchanged and the registry is left
/// untouched. On success the asset moves to the buyer, its approval is
/// cleared and its listing is removed.
pub fn exchange_coins<A: AssetStorage + ?Sized, C: CoinStorage + ?Sized>(
    assets: &mut A,
    coins: &mut C,
    ctx: &RuntimeContext,
    token_id: u64,
) -> AssetResult<()> {
    let mut asset = match assets.get_asset(token_id) {
        Some(asset) if asset.owner == ctx.caller => return Err(AssetError::AlreadyOwner),
        Some(asset) if !asset.is_listed() => return Err(AssetError::NotForSale),
        Some(asset) => asset,
        // A never-minted id has no listing either
        None => return Err(AssetError::NotForSale),
    };

    let seller = asset.owner;
    let amount = asset.price;

    // Payment leg: the registry spends the buyer's coins toward the seller.
    // Runs strictly before any ownership mutation so a failure here aborts
    // the whole exchange.
    let settlement_ctx = RuntimeContext::new(assets.settlement_address());
    coin::transfer_from(coins, &settlement_ctx, &ctx.caller, &seller, amount)?;

    // Ownership leg
    asset.price = U256::zero();
    apply_transfer(assets, asset, &ctx.caller)?;

    debug!(
        "asset {} exchanged from {} to {} for {} coins",
        token_id, seller, ctx.caller, amount
    );
    Ok(())
}
