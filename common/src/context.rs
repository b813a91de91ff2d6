// Runtime Context
// Caller identity is authenticated by the surrounding runtime and handed to
// every ledger operation through this context.

use crate::crypto::Address;

/// Runtime context providing the authenticated caller for an operation.
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}
