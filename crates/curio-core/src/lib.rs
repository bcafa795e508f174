//! Curio Core - foundation types for the collectible registry
//!
//! This crate provides the identifier newtypes, account addresses, currency
//! denominations, the unified error type, and the `Shared<T>` transactional
//! cell used by every other Curio crate. It carries no domain logic of its
//! own; the collection/asset model lives in `curio-assets` and the market
//! side in `curio-market`.

#![forbid(unsafe_code)]

/// Collection, asset, inventory, listing, and payment identifiers
pub mod identifiers;

/// Account addresses for owners, sellers, and beneficiaries
pub mod address;

/// Currency denominations carried by markets and payments
pub mod currency;

/// Unified error handling
pub mod errors;

/// Closure-scoped critical sections for long-lived shared resources
pub mod shared;

pub use address::Address;
pub use currency::Currency;
pub use errors::{CurioError, CurioResult};
pub use identifiers::{AssetId, CollectionId, InventoryId, ListingId, PaymentId};
pub use shared::Shared;
