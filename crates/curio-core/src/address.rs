//! Account addresses
//!
//! Owners, sellers, creators, and royalty beneficiaries are identified by a
//! 20-byte account address rendered as `0x`-prefixed hex.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of an account address in bytes
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Create an address from raw bytes
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw address bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The all-zero address, used as a placeholder beneficiary in tests
    pub fn zero() -> Self {
        Self([0u8; ADDRESS_LEN])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Error parsing an address from its hex form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid address: {reason}")]
pub struct AddressParseError {
    reason: String,
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(hex_str).map_err(|e| AddressParseError {
            reason: e.to_string(),
        })?;
        let bytes: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|v: Vec<u8>| AddressParseError {
            reason: format!("expected {} bytes, got {}", ADDRESS_LEN, v.len()),
        })?;
        Ok(Self(bytes))
    }
}
