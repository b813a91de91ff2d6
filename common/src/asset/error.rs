// Asset Registry Error Types

use thiserror::Error;

use crate::coin::CoinError;

/// Asset operation result type
pub type AssetResult<T> = Result<T, AssetError>;

/// Errors returned by asset registry operations.
///
/// Every failure is synchronous and aborts the triggering operation with
/// zero state mutation. Settlement failures raised by the coin ledger during
/// an exchange propagate unchanged inside the `Settlement` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The named account is not the current holder of the asset
    #[error("Not the owner of this asset")]
    NotOwner,

    /// Caller is neither owner, approved spender, nor operator
    #[error("Not authorized to move this asset")]
    NotAuthorized,

    /// An approval or transfer target is the zero address
    #[error("Can not approve the zero address")]
    InvalidRecipient,

    /// The buyer already owns the asset it tries to purchase
    #[error("Caller already owns this asset")]
    AlreadyOwner,

    /// The asset has no listing price
    #[error("Asset is not for sale")]
    NotForSale,

    /// Safe-transfer destination has no executable code
    #[error("Recipient is not a contract account")]
    RecipientNotContract,

    /// Safe-transfer destination declined the asset
    #[error("Recipient does not accept asset transfers")]
    RecipientRejected,

    /// Arithmetic overflow
    #[error("Arithmetic overflow")]
    Overflow,

    /// The coin leg of an exchange failed; the inner error is unchanged
    #[error(transparent)]
    Settlement(#[from] CoinError),
}
