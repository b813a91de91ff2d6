// Coin Ledger Constants

use primitive_types::U256;

/// Decimal places of the coin (base units per whole coin = 10^18).
pub const COIN_DECIMALS: u32 = 18;

/// Whole-coin count of the genesis supply.
pub const GENESIS_SUPPLY_COINS: u64 = 1000;

/// Genesis supply in base units (1000 x 10^18), credited to the deployer
/// when the ledger is constructed.
pub fn genesis_supply() -> U256 {
    U256::from(GENESIS_SUPPLY_COINS) * U256::exp10(COIN_DECIMALS as usize)
}
