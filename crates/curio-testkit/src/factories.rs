//! Test data factories

use curio_assets::Collection;
use curio_core::{Address, Currency};
use curio_market::TradePayment;

/// A deterministic test address: twenty copies of `tag`
pub fn test_address(tag: u8) -> Address {
    Address::from_bytes([tag; 20])
}

/// The default test currency
pub fn test_currency() -> Currency {
    Currency::new("usd")
}

/// A fresh unsettled payment against `collection`
pub fn test_payment(collection: &Collection, value: u64, beneficiary: Address) -> TradePayment {
    TradePayment::new(collection.id(), test_currency(), value, beneficiary)
}
