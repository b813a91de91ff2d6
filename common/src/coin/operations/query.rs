// Coin Query Operations
// Read-only lookups. These never fail and have no side effects.

use primitive_types::U256;

use crate::crypto::Address;

use super::CoinStorage;

/// Balance of an account, in base units (zero if the account never held coins)
pub fn balance_of<S: CoinStorage + ?Sized>(storage: &S, account: &Address) -> U256 {
    storage.balance(account)
}

/// Remaining allowance from `owner` to `spender` (zero if never approved)
pub fn allowance<S: CoinStorage + ?Sized>(
    storage: &S,
    owner: &Address,
    spender: &Address,
) -> U256 {
    storage.allowance(owner, spender)
}

/// Total supply currently in circulation
pub fn total_supply<S: CoinStorage + ?Sized>(storage: &S) -> U256 {
    storage.total_supply()
}

/// Coin name
pub fn name<S: CoinStorage + ?Sized>(storage: &S) -> &str {
    &storage.metadata().name
}

/// Coin symbol
pub fn symbol<S: CoinStorage + ?Sized>(storage: &S) -> &str {
    &storage.metadata().symbol
}
