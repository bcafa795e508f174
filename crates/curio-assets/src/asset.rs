//! Minted assets
//!
//! An asset is a unique resource: it carries a globally unique identifier,
//! an owner, and its own domain store. Assets deliberately do not implement
//! `Clone` — an asset value moves between holders (owner, inventory), and at
//! any moment exactly one place holds it.

use crate::domain::{DomainStore, DomainValue};
use curio_core::{Address, AssetId, CollectionId, CurioResult};
use serde::{Deserialize, Serialize};

/// A unique minted asset
#[derive(Debug, Serialize, Deserialize)]
pub struct Asset {
    id: AssetId,
    collection: CollectionId,
    owner: Address,
    domains: DomainStore,
}

impl Asset {
    pub(crate) fn new(collection: CollectionId, owner: Address) -> Self {
        Self {
            id: AssetId::new(),
            collection,
            owner,
            domains: DomainStore::new(),
        }
    }

    /// The asset's globally unique identity
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// The collection this asset was minted into, by identity only
    pub fn collection(&self) -> CollectionId {
        self.collection
    }

    /// The current owner
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Read access to the attached domains
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Attach a domain to this asset
    ///
    /// Possession of the exclusive reference is the authorization: once an
    /// asset has been minted and handed over, only its holder can enrich it.
    pub fn attach_domain<D: DomainValue>(&mut self, value: D) -> CurioResult<()> {
        self.domains.attach(value)
    }

    /// Reassign ownership, e.g. after a completed sale
    pub fn transfer_to(&mut self, new_owner: Address) {
        tracing::trace!(asset = %self.id, from = %self.owner, to = %new_owner, "transferred asset");
        self.owner = new_owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DisplayDomain;
    use assert_matches::assert_matches;
    use curio_core::CurioError;

    fn test_asset() -> Asset {
        Asset::new(CollectionId::new(), Address::from_bytes([1u8; 20]))
    }

    #[test]
    fn fresh_assets_have_no_domains() {
        let asset = test_asset();
        assert!(asset.domains().is_empty());
    }

    #[test]
    fn holder_can_enrich_and_transfer() {
        let mut asset = test_asset();
        asset
            .attach_domain(DisplayDomain::new("Trident #1", "First of its class"))
            .unwrap();
        assert_matches!(
            asset.attach_domain(DisplayDomain::new("Trident #1", "again")),
            Err(CurioError::DuplicateDomain { .. })
        );

        let new_owner = Address::from_bytes([9u8; 20]);
        asset.transfer_to(new_owner);
        assert_eq!(asset.owner(), new_owner);
    }
}
