// Coin Input Validation Helpers

use crate::coin::{CoinError, CoinResult};
use crate::crypto::Address;

/// Validate a transfer endpoint (must be non-zero)
pub fn validate_account(account: &Address) -> CoinResult<()> {
    if account.is_zero() {
        return Err(CoinError::InvalidRecipient);
    }
    Ok(())
}
