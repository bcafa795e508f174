//! Marketplace bootstrap fixture
//!
//! Runs the full initialization sequence — create the collection, attach
//! its domains, create the listing and its two markets — and hands the
//! resulting pieces to the test. This mirrors how a deployment script wires
//! the engine together, but it is test scaffolding, not a public API.

use crate::factories::{test_address, test_currency};
use curio_assets::{
    create_collection, AssetRegistry, Collection, CreatorsDomain, DisplayDomain, MintCapability,
    MintRequest, RoyaltyPolicy, SupplyPolicy, SymbolDomain, Tag, TagsDomain, UrlDomain,
};
use curio_core::{Address, AssetId, CurioResult, InventoryId};
use curio_market::{DutchAuctionMarket, FixedPriceMarket, Inventory, Listing, Market, RoyaltyLedger};

/// Builder for a fully bootstrapped marketplace
#[derive(Debug, Clone)]
pub struct MarketplaceScenario {
    name: String,
    description: String,
    symbol: String,
    url: String,
    tags: Vec<Tag>,
    royalty_bps: u16,
    supply_limit: Option<u64>,
    seller: Address,
    creator: Address,
    fixed_price: u64,
    reserve_price: u64,
}

impl MarketplaceScenario {
    /// Start a scenario for a collection with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: "A test collection".to_string(),
            symbol: "CURIO".to_string(),
            url: "https://example.org".to_string(),
            tags: vec![Tag::Collectible],
            royalty_bps: 100,
            supply_limit: None,
            seller: test_address(0x5e),
            creator: test_address(0xc0),
            fixed_price: 500,
            reserve_price: 100,
        }
    }

    /// Set the proportional royalty rate in basis points
    pub fn with_royalty_bps(mut self, rate_bps: u16) -> Self {
        self.royalty_bps = rate_bps;
        self
    }

    /// Cap the collection's supply
    pub fn with_supply_limit(mut self, max: u64) -> Self {
        self.supply_limit = Some(max);
        self
    }

    /// Set the collection's tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Set the listing's seller
    pub fn with_seller(mut self, seller: Address) -> Self {
        self.seller = seller;
        self
    }

    /// Set the fixed-price market's price
    pub fn with_fixed_price(mut self, price: u64) -> Self {
        self.fixed_price = price;
        self
    }

    /// Set the dutch auction's reserve price
    pub fn with_reserve_price(mut self, reserve: u64) -> Self {
        self.reserve_price = reserve;
        self
    }

    /// Run the bootstrap sequence
    pub fn build(self) -> CurioResult<MarketplaceFixture> {
        let (mut collection, mint_cap) = create_collection();
        collection.attach_domain(&mint_cap, DisplayDomain::new(self.name, self.description))?;
        collection.attach_domain(&mint_cap, SymbolDomain::new(self.symbol))?;
        collection.attach_domain(&mint_cap, UrlDomain::new(self.url))?;
        collection.attach_domain(&mint_cap, CreatorsDomain::new(vec![self.creator])?)?;
        collection.attach_domain(&mint_cap, TagsDomain::new(self.tags))?;
        collection.attach_domain(&mint_cap, RoyaltyPolicy::proportional(self.royalty_bps)?)?;
        if let Some(max) = self.supply_limit {
            collection.attach_domain(&mint_cap, SupplyPolicy::limited(max))?;
        }

        let registry = AssetRegistry::new(&collection);
        let ledger = RoyaltyLedger::new(&collection);

        let mut listing = Listing::new(self.seller);
        let fixed_price_inventory = listing.create_inventory();
        listing.register_market(
            fixed_price_inventory,
            Market::FixedPrice(FixedPriceMarket::new(
                test_currency(),
                self.fixed_price,
                false,
            )),
        )?;
        let auction_inventory = listing.create_inventory();
        listing.register_market(
            auction_inventory,
            Market::DutchAuction(DutchAuctionMarket::new(
                test_currency(),
                self.reserve_price,
                false,
            )),
        )?;

        Ok(MarketplaceFixture {
            collection,
            mint_cap,
            registry,
            ledger,
            listing,
            fixed_price_inventory,
            auction_inventory,
            creator: self.creator,
        })
    }
}

/// A bootstrapped collection, registry, ledger, and two-market listing
#[derive(Debug)]
pub struct MarketplaceFixture {
    /// The collection with all domains attached
    pub collection: Collection,
    /// The one live mint capability
    pub mint_cap: MintCapability,
    /// The collection's asset registry
    pub registry: AssetRegistry,
    /// The collection's royalty ledger
    pub ledger: RoyaltyLedger,
    /// The seller's listing with two bound markets
    pub listing: Listing,
    /// Inventory bound to the fixed-price market
    pub fixed_price_inventory: InventoryId,
    /// Inventory bound to the dutch-auction market
    pub auction_inventory: InventoryId,
    /// The creator credited on the collection
    pub creator: Address,
}

impl MarketplaceFixture {
    /// Mint an nft into the fixed-price inventory
    pub fn mint_into_fixed_price(&mut self, name: &str) -> CurioResult<AssetId> {
        self.mint_into(self.fixed_price_inventory, name)
    }

    /// Mint an nft into the dutch-auction inventory
    pub fn mint_into_auction(&mut self, name: &str) -> CurioResult<AssetId> {
        self.mint_into(self.auction_inventory, name)
    }

    /// Mint an nft into an arbitrary inventory of the listing
    pub fn mint_into(&mut self, inventory: InventoryId, name: &str) -> CurioResult<AssetId> {
        let request = MintRequest::new(
            self.listing.seller(),
            name,
            format!("{name}, minted by the testkit"),
            format!("https://example.org/{name}"),
        );
        self.registry.mint_nft(
            &self.collection,
            &self.mint_cap,
            request,
            self.listing.inventory_mut(inventory)?,
        )
    }

    /// The fixed-price market's asset pool
    pub fn fixed_price_pool(&self) -> &Inventory {
        self.listing
            .inventory(self.fixed_price_inventory)
            .expect("fixture always owns its inventories")
    }

    /// The dutch-auction market's asset pool
    pub fn auction_pool(&self) -> &Inventory {
        self.listing
            .inventory(self.auction_inventory)
            .expect("fixture always owns its inventories")
    }
}
