//! Pools of unsold assets
//!
//! An inventory is an unordered pool of unsold assets scoped to one listing.
//! Assets move in and out by value, so an asset can sit in at most one
//! inventory at a time; the pool itself never copies or fabricates assets.

use curio_assets::{Asset, AssetSink};
use curio_core::{AssetId, CurioError, CurioResult, InventoryId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pool of unsold assets bound to one listing
#[derive(Debug, Serialize, Deserialize)]
pub struct Inventory {
    id: InventoryId,
    assets: BTreeMap<AssetId, Asset>,
}

impl Inventory {
    pub(crate) fn new(id: InventoryId) -> Self {
        Self {
            id,
            assets: BTreeMap::new(),
        }
    }

    /// The inventory's identity
    pub fn id(&self) -> InventoryId {
        self.id
    }

    /// Deposit an asset into the pool
    ///
    /// Asset ids are globally unique, so a duplicate deposit indicates a
    /// caller bug and is rejected without touching the stored asset.
    pub fn deposit(&mut self, asset: Asset) -> CurioResult<()> {
        let id = asset.id();
        if self.assets.contains_key(&id) {
            return Err(CurioError::invalid(format!(
                "asset {id} is already in inventory {}",
                self.id
            )));
        }
        self.assets.insert(id, asset);
        tracing::trace!(inventory = %self.id, asset = %id, "deposited asset");
        Ok(())
    }

    /// Withdraw an asset from the pool
    pub fn withdraw(&mut self, id: AssetId) -> CurioResult<Asset> {
        let asset = self
            .assets
            .remove(&id)
            .ok_or_else(|| CurioError::asset_not_found(id.to_string()))?;
        tracing::trace!(inventory = %self.id, asset = %id, "withdrew asset");
        Ok(asset)
    }

    /// Whether the asset is currently in this pool
    pub fn contains(&self, id: AssetId) -> bool {
        self.assets.contains_key(&id)
    }

    /// Read access to a pooled asset
    pub fn asset(&self, id: AssetId) -> Option<&Asset> {
        self.assets.get(&id)
    }

    /// The pooled asset ids, in id order
    pub fn asset_ids(&self) -> impl Iterator<Item = AssetId> + '_ {
        self.assets.keys().copied()
    }

    /// Number of pooled assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetSink for Inventory {
    fn deposit(&mut self, asset: Asset) -> CurioResult<()> {
        Inventory::deposit(self, asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use curio_assets::{create_collection, AssetRegistry, DisplayDomain};
    use curio_core::Address;

    fn minted_asset() -> Asset {
        let (collection, cap) = create_collection();
        let mut registry = AssetRegistry::new(&collection);
        let mut asset = registry
            .mint(&collection, &cap, Address::from_bytes([1u8; 20]))
            .unwrap();
        asset
            .attach_domain(DisplayDomain::new("Trident #1", "First of its class"))
            .unwrap();
        asset
    }

    #[test]
    fn withdraw_returns_the_identical_asset() {
        let mut inventory = Inventory::new(InventoryId::new());
        let asset = minted_asset();
        let id = asset.id();
        let domains_before = asset.domains().clone();

        inventory.deposit(asset).unwrap();
        assert!(inventory.contains(id));

        let withdrawn = inventory.withdraw(id).unwrap();
        assert_eq!(withdrawn.id(), id);
        assert_eq!(withdrawn.domains(), &domains_before);
        assert!(inventory.is_empty());
    }

    #[test]
    fn withdrawing_an_absent_asset_fails() {
        let mut inventory = Inventory::new(InventoryId::new());
        assert_matches!(
            inventory.withdraw(AssetId::new()),
            Err(CurioError::AssetNotFound { .. })
        );
    }
}
