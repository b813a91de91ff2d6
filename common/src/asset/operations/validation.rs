// Asset Input Validation Helpers

use crate::asset::{AssetError, AssetResult};
use crate::crypto::Address;

/// Validate an approval or transfer target (must be non-zero)
pub fn validate_recipient(recipient: &Address) -> AssetResult<()> {
    if recipient.is_zero() {
        return Err(AssetError::InvalidRecipient);
    }
    Ok(())
}
