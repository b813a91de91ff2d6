// Coin Ledger Error Types

use thiserror::Error;

/// Coin operation result type
pub type CoinResult<T> = Result<T, CoinError>;

/// Errors returned by coin ledger operations.
///
/// Every failure is synchronous and aborts the triggering operation with
/// zero state mutation; callers decide whether to resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoinError {
    /// A transfer endpoint is the zero address
    #[error("Can not send coins to the zero address")]
    InvalidRecipient,

    /// Amount exceeds the holder's balance
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// Caller lacks the required allowance or authority role
    #[error("Not authorized")]
    NotAuthorized,

    /// An account may not approve itself as a spender
    #[error("Can not approve yourself")]
    SelfApproval,

    /// Source and destination are the same account
    #[error("Same from and to account")]
    SameParty,

    /// Arithmetic overflow
    #[error("Arithmetic overflow")]
    Overflow,
}
