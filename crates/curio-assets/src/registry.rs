//! Asset registry: mint and mint_nft
//!
//! The registry owns the set of asset identifiers minted into a collection.
//! `mint` produces a bare asset; `mint_nft` is the composite operation that
//! also attaches the display, url, and attributes domains and deposits the
//! result into a caller-supplied [`AssetSink`] (an inventory, on the market
//! side). The composite is all-or-nothing: the minted id is recorded only
//! after the deposit succeeds, so a failure at any step leaves the registry
//! exactly as it was.

use crate::asset::Asset;
use crate::authority::{require_capability, MintCapability};
use crate::collection::Collection;
use crate::domain::{AttributesDomain, DisplayDomain, SupplyPolicy, UrlDomain};
use curio_core::{Address, AssetId, CollectionId, CurioError, CurioResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A holding pool that accepts freshly minted assets
///
/// The seam between minting and selling: inventories on the market side
/// implement this, and `mint_nft` deposits through it without knowing
/// anything about listings or sale mechanisms.
pub trait AssetSink {
    /// Accept a freshly minted asset
    fn deposit(&mut self, asset: Asset) -> CurioResult<()>;
}

/// Everything `mint_nft` needs to enrich a fresh asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    owner: Address,
    name: String,
    description: String,
    url: String,
    attributes: BTreeMap<String, String>,
}

impl MintRequest {
    /// Create a request for an asset with display text and a url
    pub fn new(
        owner: Address,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            owner,
            name: name.into(),
            description: description.into(),
            url: url.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add one attribute pair
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The owner the asset will be minted to
    pub fn owner(&self) -> Address {
        self.owner
    }
}

/// The set of assets minted into one collection
#[derive(Debug, Serialize, Deserialize)]
pub struct AssetRegistry {
    collection: CollectionId,
    minted: BTreeSet<AssetId>,
}

impl AssetRegistry {
    /// Create the registry for a collection
    pub fn new(collection: &Collection) -> Self {
        Self {
            collection: collection.id(),
            minted: BTreeSet::new(),
        }
    }

    /// The collection this registry mints into
    pub fn collection(&self) -> CollectionId {
        self.collection
    }

    /// Number of assets minted so far
    pub fn len(&self) -> usize {
        self.minted.len()
    }

    /// Whether nothing has been minted yet
    pub fn is_empty(&self) -> bool {
        self.minted.is_empty()
    }

    /// Whether the asset id was minted by this registry
    pub fn contains(&self, id: AssetId) -> bool {
        self.minted.contains(&id)
    }

    /// Mint a bare asset with a fresh unique identifier and no domains
    ///
    /// Requires the capability bound to this registry's collection; checks
    /// the collection's supply policy if one is attached.
    pub fn mint(
        &mut self,
        collection: &Collection,
        cap: &MintCapability,
        owner: Address,
    ) -> CurioResult<Asset> {
        self.authorize(collection, cap)?;
        let asset = Asset::new(self.collection, owner);
        self.minted.insert(asset.id());
        tracing::debug!(collection = %self.collection, asset = %asset.id(), "minted asset");
        Ok(asset)
    }

    /// Mint, enrich, and deposit an asset in one logical transaction
    ///
    /// Attaches the display, url, and attributes domains described by the
    /// request, then deposits the asset into `sink`. If any step fails the
    /// whole mint is aborted: nothing is recorded and no partial asset is
    /// deposited.
    pub fn mint_nft(
        &mut self,
        collection: &Collection,
        cap: &MintCapability,
        request: MintRequest,
        sink: &mut dyn AssetSink,
    ) -> CurioResult<AssetId> {
        self.authorize(collection, cap)?;

        let mut asset = Asset::new(self.collection, request.owner);
        asset.attach_domain(DisplayDomain::new(request.name, request.description))?;
        asset.attach_domain(UrlDomain::new(request.url))?;
        asset.attach_domain(AttributesDomain::new(request.attributes))?;

        let id = asset.id();
        sink.deposit(asset)?;

        // Record last: a deposit failure must leave the registry unchanged.
        self.minted.insert(id);
        tracing::debug!(collection = %self.collection, asset = %id, "minted and deposited nft");
        Ok(id)
    }

    fn authorize(&self, collection: &Collection, cap: &MintCapability) -> CurioResult<()> {
        require_capability(cap, collection)?;
        if collection.id() != self.collection {
            return Err(CurioError::authorization(format!(
                "registry mints into {}, not {}",
                self.collection,
                collection.id()
            )));
        }
        if let Some(policy) = collection.domains().get::<SupplyPolicy>() {
            if !policy.allows(self.minted.len() as u64) {
                // allows() only refuses limited policies
                let limit = policy.limit().unwrap_or_default();
                return Err(CurioError::supply_exceeded(limit));
            }
        }
        Ok(())
    }
}
