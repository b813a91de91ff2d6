// Coin Ledger Types
// Core data structures for the fungible coin ledger.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// Immutable coin metadata, fixed at ledger construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMetadata {
    /// Coin name
    pub name: String,
    /// Coin symbol/ticker
    pub symbol: String,
}

impl CoinMetadata {
    /// Create new coin metadata
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Observable log record appended by coin operations.
///
/// A `None` endpoint is the null address: mint records carry `from: None`,
/// burn records carry `to: None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinEvent {
    /// Coins moved between accounts (or entered/left the supply)
    Transfer {
        from: Option<Address>,
        to: Option<Address>,
        amount: U256,
    },
    /// An allowance was overwritten
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
}
