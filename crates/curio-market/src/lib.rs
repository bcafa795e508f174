//! Curio Market - inventories, listings, and the royalty ledger
//!
//! This crate owns the market side of the engine:
//!
//! - [`Inventory`], the pool of unsold assets a sale mechanism draws from;
//!   it implements `curio_assets::AssetSink`, so minting deposits straight
//!   into it;
//! - [`Listing`], a seller-owned aggregate binding inventories to market
//!   variants ([`FixedPriceMarket`], [`DutchAuctionMarket`]);
//! - [`TradePayment`] and the [`RoyaltyLedger`], which splits every trade
//!   payment into the collection's royalty cut and the beneficiary's
//!   remainder, exactly conserving value.
//!
//! The sale mechanisms themselves (bid matching, price decay) are external
//! collaborators: they withdraw from inventories and hand the resulting
//! payments to the ledger.

#![forbid(unsafe_code)]

/// Pools of unsold assets
pub mod inventory;

/// Seller-owned listings and market registration
pub mod listing;

/// In-flight trade payments
pub mod payment;

/// Royalty computation and settlement
pub mod royalty;

pub use inventory::Inventory;
pub use listing::{DutchAuctionMarket, FixedPriceMarket, Listing, Market};
pub use payment::{PaymentState, TradePayment};
pub use royalty::{RoyaltyLedger, Settlement};
