//! Curio testing infrastructure
//!
//! Common factories and fixtures shared by tests across the workspace, so
//! individual tests don't re-sequence collection bootstrapping by hand.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! curio-testkit = { path = "../curio-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust
//! use curio_testkit::*;
//!
//! let mut fixture = MarketplaceScenario::new("Suimarines")
//!     .with_royalty_bps(100)
//!     .build()
//!     .unwrap();
//! let asset_id = fixture.mint_into_fixed_price("Trident #1").unwrap();
//! assert!(fixture.fixed_price_pool().contains(asset_id));
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![forbid(unsafe_code)]

pub mod factories;
pub mod fixtures;
pub mod tracing_init;

pub use factories::*;
pub use fixtures::*;
pub use tracing_init::init_tracing;

// Re-export commonly used types so tests need a single import
pub use curio_assets::{
    create_collection, require_capability, Asset, AssetRegistry, Collection, MintCapability,
    MintRequest, RoyaltyPolicy, Tag,
};
pub use curio_core::{Address, AssetId, Currency, CurioError, CurioResult, InventoryId, Shared};
pub use curio_market::{
    DutchAuctionMarket, FixedPriceMarket, Listing, Market, RoyaltyLedger, TradePayment,
};
