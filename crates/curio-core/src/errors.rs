//! Unified error system for Curio
//!
//! One error type covers every operation in the workspace. All failures are
//! synchronous and abort the enclosing operation; nothing here is retried
//! automatically, and no variant is ever silently swallowed.

use serde::{Deserialize, Serialize};

/// Unified error type for all Curio operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum CurioError {
    /// Capability missing or bound to a different resource identity
    #[error("Authorization denied: {message}")]
    Authorization {
        /// What was attempted without a matching capability
        message: String,
    },

    /// A domain of this type is already attached to the target
    #[error("Duplicate domain: {domain}")]
    DuplicateDomain {
        /// The domain kind that was attached twice
        domain: String,
    },

    /// The requested domain was never attached to the target
    #[error("Domain not found: {domain}")]
    DomainNotFound {
        /// The domain kind that is absent
        domain: String,
    },

    /// Royalty collection attempted on a collection with no royalty policy
    #[error("No royalty policy configured for {collection}")]
    PolicyNotFound {
        /// The collection missing a policy
        collection: String,
    },

    /// The payment was already disbursed; re-settling would duplicate value
    #[error("Payment already settled: {payment}")]
    AlreadySettled {
        /// The payment that was settled before
        payment: String,
    },

    /// The inventory id does not belong to the addressed listing
    #[error("Unknown inventory: {inventory}")]
    UnknownInventory {
        /// The inventory id that failed to resolve
        inventory: String,
    },

    /// The asset is not present where the operation expected it
    #[error("Asset not found: {asset}")]
    AssetNotFound {
        /// The asset id that failed to resolve
        asset: String,
    },

    /// Minting would exceed the collection's configured supply limit
    #[error("Supply exceeded: limit is {limit}")]
    SupplyExceeded {
        /// The configured maximum supply
        limit: u64,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// What was malformed
        message: String,
    },
}

impl CurioError {
    /// Create an authorization error
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    /// Create a duplicate domain error
    pub fn duplicate_domain(domain: impl Into<String>) -> Self {
        Self::DuplicateDomain {
            domain: domain.into(),
        }
    }

    /// Create a domain not found error
    pub fn domain_not_found(domain: impl Into<String>) -> Self {
        Self::DomainNotFound {
            domain: domain.into(),
        }
    }

    /// Create a policy not found error
    pub fn policy_not_found(collection: impl Into<String>) -> Self {
        Self::PolicyNotFound {
            collection: collection.into(),
        }
    }

    /// Create an already settled error
    pub fn already_settled(payment: impl Into<String>) -> Self {
        Self::AlreadySettled {
            payment: payment.into(),
        }
    }

    /// Create an unknown inventory error
    pub fn unknown_inventory(inventory: impl Into<String>) -> Self {
        Self::UnknownInventory {
            inventory: inventory.into(),
        }
    }

    /// Create an asset not found error
    pub fn asset_not_found(asset: impl Into<String>) -> Self {
        Self::AssetNotFound {
            asset: asset.into(),
        }
    }

    /// Create a supply exceeded error
    pub fn supply_exceeded(limit: u64) -> Self {
        Self::SupplyExceeded { limit }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type alias for Curio operations
pub type CurioResult<T> = Result<T, CurioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn constructors_produce_matching_variants() {
        assert_matches!(
            CurioError::authorization("mint"),
            CurioError::Authorization { .. }
        );
        assert_matches!(
            CurioError::duplicate_domain("display"),
            CurioError::DuplicateDomain { .. }
        );
        assert_matches!(
            CurioError::supply_exceeded(10),
            CurioError::SupplyExceeded { limit: 10 }
        );
    }

    #[test]
    fn errors_render_their_context() {
        let err = CurioError::policy_not_found("collection-x");
        assert!(err.to_string().contains("collection-x"));
    }
}
