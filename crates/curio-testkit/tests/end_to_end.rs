//! End-to-end flows: bootstrap, mint, sell, settle
//!
//! Walks the whole engine the way a deployment would: collection with a 1%
//! royalty, a listing hosting a fixed-price market and a dutch auction over
//! disjoint pools, a simulated sale, and the royalty split.

use assert_matches::assert_matches;
use curio_testkit::*;

#[test]
fn fixed_price_sale_splits_one_percent_royalty() {
    init_tracing();
    let mut fixture = MarketplaceScenario::new("Suimarines")
        .with_royalty_bps(100)
        .with_fixed_price(500)
        .build()
        .unwrap();

    let asset_id = fixture.mint_into_fixed_price("Trident #1").unwrap();
    assert!(fixture.fixed_price_pool().contains(asset_id));
    assert_matches!(
        fixture.listing.market(fixture.fixed_price_inventory),
        Some(Market::FixedPrice(market)) if market.price() == 500
    );

    // Simulate the sale mechanism: withdraw the asset, hand it to the
    // buyer, and produce a payment at the listed price.
    let buyer = test_address(0xb1);
    let mut asset = fixture
        .listing
        .withdraw(fixture.fixed_price_inventory, asset_id)
        .unwrap();
    asset.transfer_to(buyer);
    assert_eq!(asset.owner(), buyer);

    let seller = fixture.listing.seller();
    let mut payment = test_payment(&fixture.collection, 500, seller);
    let settlement = fixture
        .ledger
        .collect_royalty(&mut payment, &fixture.collection)
        .unwrap();

    assert_eq!(settlement.royalty(), 5);
    assert_eq!(settlement.remainder(), 495);
    assert_eq!(settlement.beneficiary(), seller);
    assert_eq!(fixture.ledger.accumulated(), 5);
    assert_eq!(fixture.ledger.paid_to(&seller), 495);

    // The payment is terminal now; settling again must not move value.
    assert_matches!(
        fixture
            .ledger
            .collect_royalty(&mut payment, &fixture.collection),
        Err(CurioError::AlreadySettled { .. })
    );
    assert_eq!(fixture.ledger.accumulated(), 5);
}

#[test]
fn two_markets_sell_disjoint_pools() {
    init_tracing();
    let mut fixture = MarketplaceScenario::new("Suimarines")
        .with_reserve_price(100)
        .build()
        .unwrap();

    assert_matches!(
        fixture.listing.market(fixture.auction_inventory),
        Some(Market::DutchAuction(market)) if market.reserve_price() == 100
    );

    let in_fixed = fixture.mint_into_fixed_price("Trident #1").unwrap();
    let in_auction = fixture.mint_into_auction("Trident #2").unwrap();

    assert!(fixture.fixed_price_pool().contains(in_fixed));
    assert!(!fixture.fixed_price_pool().contains(in_auction));
    assert!(fixture.auction_pool().contains(in_auction));
    assert!(!fixture.auction_pool().contains(in_fixed));
    assert_eq!(fixture.registry.len(), 2);
}

#[test]
fn bootstrap_attaches_the_full_domain_set() {
    init_tracing();
    let fixture = MarketplaceScenario::new("Suimarines")
        .with_tags([Tag::Art, Tag::Collectible])
        .build()
        .unwrap();
    let domains = fixture.collection.domains();

    let display: &curio_assets::DisplayDomain = domains.read().unwrap();
    assert_eq!(display.name(), "Suimarines");
    let tags: &curio_assets::TagsDomain = domains.read().unwrap();
    assert!(tags.contains(Tag::Art));
    let creators: &curio_assets::CreatorsDomain = domains.read().unwrap();
    assert!(creators.contains(&fixture.creator));
    let policy: &RoyaltyPolicy = domains.read().unwrap();
    assert_eq!(policy.royalty_owed(10_000), 100);
}

#[test]
fn royalties_accrue_across_sales_and_release_to_the_creator() {
    init_tracing();
    let mut fixture = MarketplaceScenario::new("Suimarines")
        .with_royalty_bps(250)
        .build()
        .unwrap();
    let seller = fixture.listing.seller();

    for value in [400u64, 1_000, 99] {
        let mut payment = test_payment(&fixture.collection, value, seller);
        fixture
            .ledger
            .collect_royalty(&mut payment, &fixture.collection)
            .unwrap();
    }
    // floor(400*2.5%) + floor(1000*2.5%) + floor(99*2.5%) = 10 + 25 + 2
    assert_eq!(fixture.ledger.accumulated(), 37);

    let creator = fixture.creator;
    let released = fixture
        .ledger
        .release(&fixture.collection, &fixture.mint_cap, creator)
        .unwrap();
    assert_eq!(released, 37);
    assert_eq!(fixture.ledger.accumulated(), 0);
    assert_eq!(fixture.ledger.paid_to(&creator), 37);
}

#[test]
fn a_shared_listing_serializes_concurrent_deposits() {
    init_tracing();
    let mut fixture = MarketplaceScenario::new("Suimarines").build().unwrap();
    let inventory = fixture.fixed_price_inventory;

    // Mint up front, then race the deposits through the shared handle; each
    // mutate call is one critical section, so every deposit lands intact.
    let seller = fixture.listing.seller();
    let assets: Vec<_> = (0..16)
        .map(|_| {
            fixture
                .registry
                .mint(&fixture.collection, &fixture.mint_cap, seller)
                .unwrap()
        })
        .collect();

    let listing = Shared::new(fixture.listing);
    let handles: Vec<_> = assets
        .into_iter()
        .map(|asset| {
            let listing = listing.clone();
            std::thread::spawn(move || {
                listing.mutate(|l| l.deposit(inventory, asset)).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(listing.read(|l| l.inventory(inventory).unwrap().len()), 16);
}

#[test]
fn supply_limited_collection_stops_minting() {
    init_tracing();
    let mut fixture = MarketplaceScenario::new("Suimarines")
        .with_supply_limit(1)
        .build()
        .unwrap();

    fixture.mint_into_fixed_price("Trident #1").unwrap();
    let err = fixture.mint_into_fixed_price("Trident #2").unwrap_err();
    assert_matches!(err, CurioError::SupplyExceeded { limit: 1 });
    assert_eq!(fixture.registry.len(), 1);
    assert_eq!(fixture.fixed_price_pool().len(), 1);
}
