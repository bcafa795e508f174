//! Mint supply policy domain

use serde::{Deserialize, Serialize};

/// How many assets a collection allows to be minted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyPolicy {
    /// No limit on minted assets
    Unlimited,
    /// At most `max` assets may ever be minted
    Limited {
        /// The maximum supply
        max: u64,
    },
}

impl SupplyPolicy {
    /// Create an unlimited supply policy
    pub fn unlimited() -> Self {
        SupplyPolicy::Unlimited
    }

    /// Create a limited supply policy
    pub fn limited(max: u64) -> Self {
        SupplyPolicy::Limited { max }
    }

    /// Whether one more mint is allowed given the current minted count
    pub fn allows(&self, minted: u64) -> bool {
        match self {
            SupplyPolicy::Unlimited => true,
            SupplyPolicy::Limited { max } => minted < *max,
        }
    }

    /// The configured limit, if any
    pub fn limit(&self) -> Option<u64> {
        match self {
            SupplyPolicy::Unlimited => None,
            SupplyPolicy::Limited { max } => Some(*max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_supply_stops_at_the_limit() {
        let policy = SupplyPolicy::limited(2);
        assert!(policy.allows(0));
        assert!(policy.allows(1));
        assert!(!policy.allows(2));
        assert_eq!(policy.limit(), Some(2));
    }

    #[test]
    fn unlimited_supply_always_allows() {
        assert!(SupplyPolicy::unlimited().allows(u64::MAX));
        assert_eq!(SupplyPolicy::unlimited().limit(), None);
    }
}
