//! Core identifier types used across the Curio workspace
//!
//! Every long-lived entity (collection, asset, inventory, listing, payment)
//! carries one of these newtypes. Identifiers are freshly generated v4 UUIDs,
//! so they are collision-free for the lifetime of the system without any
//! central counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from a UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier for a collection
    ///
    /// Each collection is a singleton shared resource; its mint capability is
    /// bound to this identity at creation time.
    CollectionId,
    "collection"
);

define_id!(
    /// Identifier for a minted asset
    ///
    /// Globally unique across all collections for the lifetime of the system.
    AssetId,
    "asset"
);

define_id!(
    /// Identifier for an inventory within a listing
    InventoryId,
    "inventory"
);

define_id!(
    /// Identifier for a seller-owned listing
    ListingId,
    "listing"
);

define_id!(
    /// Identifier for an in-flight trade payment
    PaymentId,
    "payment"
);
