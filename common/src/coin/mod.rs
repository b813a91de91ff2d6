// Coin Ledger
// Account-balance bookkeeping for the fungible coin supply.
//
// Features:
// - Balance and total-supply tracking per account
// - Allowances for delegated transfers (ERC20-style)
// - Authority-gated mint/burn, plus allowance-gated burn_from
// - Observable Transfer/Approval log records
//
// Module Structure:
// - constants: supply parameters
// - error: error types
// - types: core data structures (CoinMetadata, CoinEvent)
// - store: in-memory storage backend
// - operations: core operation logic (transfer, approve, mint, burn, query)

mod constants;
mod error;
pub mod operations;
mod store;
mod types;

pub use constants::*;
pub use error::*;
pub use operations::*;
pub use store::*;
pub use types::*;
