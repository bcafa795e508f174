//! Seller-owned listings and market registration
//!
//! A listing aggregates one or more inventories, each bound to exactly one
//! market variant. Bindings are immutable once registered; the market's
//! parameters (price, reserve, whitelist flag) are fixed at creation. The
//! matching logic of the markets themselves lives outside this crate — a
//! sale mechanism withdraws from the bound inventory and produces a
//! [`crate::TradePayment`].

use crate::inventory::Inventory;
use curio_assets::Asset;
use curio_core::{Address, AssetId, Currency, CurioError, CurioResult, InventoryId, ListingId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed-price sale parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPriceMarket {
    currency: Currency,
    price: u64,
    is_whitelisted: bool,
}

impl FixedPriceMarket {
    /// Create a fixed-price market
    pub fn new(currency: Currency, price: u64, is_whitelisted: bool) -> Self {
        Self {
            currency,
            price,
            is_whitelisted,
        }
    }

    /// The sale currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The fixed sale price
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Whether buyers must hold a whitelist certificate
    pub fn is_whitelisted(&self) -> bool {
        self.is_whitelisted
    }
}

/// Timed descending-price auction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutchAuctionMarket {
    currency: Currency,
    reserve_price: u64,
    is_whitelisted: bool,
}

impl DutchAuctionMarket {
    /// Create a dutch-auction market
    pub fn new(currency: Currency, reserve_price: u64, is_whitelisted: bool) -> Self {
        Self {
            currency,
            reserve_price,
            is_whitelisted,
        }
    }

    /// The sale currency
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The price floor the auction never descends below
    pub fn reserve_price(&self) -> u64 {
        self.reserve_price
    }

    /// Whether bidders must hold a whitelist certificate
    pub fn is_whitelisted(&self) -> bool {
        self.is_whitelisted
    }
}

/// A sale mechanism bound to an inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    /// Sell at a fixed price
    FixedPrice(FixedPriceMarket),
    /// Timed descending-price auction
    DutchAuction(DutchAuctionMarket),
}

impl Market {
    /// The sale currency
    pub fn currency(&self) -> &Currency {
        match self {
            Market::FixedPrice(market) => market.currency(),
            Market::DutchAuction(market) => market.currency(),
        }
    }

    /// Whether participation requires a whitelist certificate
    pub fn is_whitelisted(&self) -> bool {
        match self {
            Market::FixedPrice(market) => market.is_whitelisted(),
            Market::DutchAuction(market) => market.is_whitelisted(),
        }
    }
}

/// A seller-owned aggregate of inventories and their bound markets
#[derive(Debug, Serialize, Deserialize)]
pub struct Listing {
    id: ListingId,
    seller: Address,
    inventories: BTreeMap<InventoryId, Inventory>,
    markets: BTreeMap<InventoryId, Market>,
}

impl Listing {
    /// Create an empty listing owned by `seller`
    pub fn new(seller: Address) -> Self {
        let id = ListingId::new();
        tracing::debug!(listing = %id, seller = %seller, "created listing");
        Self {
            id,
            seller,
            inventories: BTreeMap::new(),
            markets: BTreeMap::new(),
        }
    }

    /// The listing's identity
    pub fn id(&self) -> ListingId {
        self.id
    }

    /// The seller who owns this listing
    pub fn seller(&self) -> Address {
        self.seller
    }

    /// Allocate a new empty inventory owned by this listing
    ///
    /// Multiple inventories per listing are permitted and independent, so
    /// different market types can sell disjoint asset pools side by side.
    pub fn create_inventory(&mut self) -> InventoryId {
        let id = InventoryId::new();
        self.inventories.insert(id, Inventory::new(id));
        tracing::debug!(listing = %self.id, inventory = %id, "created inventory");
        id
    }

    /// Bind a market variant to one of this listing's inventories
    ///
    /// Fails with `UnknownInventory` if the id is not this listing's, and
    /// with `Invalid` if the inventory already has a market — bindings and
    /// their parameters are fixed once registered.
    pub fn register_market(&mut self, inventory: InventoryId, market: Market) -> CurioResult<()> {
        if !self.inventories.contains_key(&inventory) {
            return Err(CurioError::unknown_inventory(inventory.to_string()));
        }
        if self.markets.contains_key(&inventory) {
            return Err(CurioError::invalid(format!(
                "inventory {inventory} already has a market"
            )));
        }
        tracing::debug!(listing = %self.id, inventory = %inventory, "registered market");
        self.markets.insert(inventory, market);
        Ok(())
    }

    /// The market bound to an inventory, if one was registered
    pub fn market(&self, inventory: InventoryId) -> Option<&Market> {
        self.markets.get(&inventory)
    }

    /// Read access to one of this listing's inventories
    pub fn inventory(&self, id: InventoryId) -> CurioResult<&Inventory> {
        self.inventories
            .get(&id)
            .ok_or_else(|| CurioError::unknown_inventory(id.to_string()))
    }

    /// Exclusive access to one of this listing's inventories
    ///
    /// Sale mechanisms and the composite mint use this to deposit into and
    /// withdraw from the bound pool.
    pub fn inventory_mut(&mut self, id: InventoryId) -> CurioResult<&mut Inventory> {
        self.inventories
            .get_mut(&id)
            .ok_or_else(|| CurioError::unknown_inventory(id.to_string()))
    }

    /// Deposit an asset into one of this listing's inventories
    pub fn deposit(&mut self, inventory: InventoryId, asset: Asset) -> CurioResult<()> {
        self.inventory_mut(inventory)?.deposit(asset)
    }

    /// Withdraw an asset from one of this listing's inventories
    pub fn withdraw(&mut self, inventory: InventoryId, asset: AssetId) -> CurioResult<Asset> {
        self.inventory_mut(inventory)?.withdraw(asset)
    }

    /// This listing's inventory ids, in id order
    pub fn inventory_ids(&self) -> impl Iterator<Item = InventoryId> + '_ {
        self.inventories.keys().copied()
    }
}
