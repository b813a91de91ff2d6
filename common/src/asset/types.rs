// Asset Registry Types
// Core data structures for the non-fungible asset registry.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// A registered asset.
///
/// Ids are assigned sequentially starting at 0 and never reused; a record is
/// never destroyed once minted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset id
    pub token_id: u64,

    /// Current owner
    pub owner: Address,

    /// Single-spender approval (cleared on every ownership change)
    pub approved: Option<Address>,

    /// Listing price in coin base units; zero means not listed
    pub price: U256,
}

impl Asset {
    /// Create a freshly minted asset: unapproved, unlisted
    pub fn new(token_id: u64, owner: Address) -> Self {
        Self {
            token_id,
            owner,
            approved: None,
            price: U256::zero(),
        }
    }

    /// Whether the asset currently carries a listing price
    pub fn is_listed(&self) -> bool {
        !self.price.is_zero()
    }

    /// Clear approval (called after every transfer)
    pub fn clear_approval(&mut self) {
        self.approved = None;
    }
}

/// Observable log record appended by asset operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetEvent {
    /// An asset changed hands (`from: None` marks a mint)
    Transfer {
        from: Option<Address>,
        to: Address,
        token_id: u64,
    },
    /// A single-spender approval was granted
    Approval {
        owner: Address,
        approved: Address,
        token_id: u64,
    },
    /// A blanket operator approval was set or cleared
    ApprovalForAll {
        owner: Address,
        operator: Address,
        approved: bool,
    },
}
