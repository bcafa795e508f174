//! Currency denominations
//!
//! Markets and trade payments are denominated in a named fungible currency.
//! The engine never converts between denominations; a payment settles in the
//! currency its market was registered with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency denomination, e.g. `"usd"` or a chain-native token symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Create a currency from its denomination name
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    /// Get the denomination name
    pub fn denom(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(denom: &str) -> Self {
        Self::new(denom)
    }
}

impl From<String> for Currency {
    fn from(denom: String) -> Self {
        Self::new(denom)
    }
}
