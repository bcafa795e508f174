//! The collection shared resource
//!
//! A collection is a long-lived resource created once and never destroyed.
//! Its domains carry everything descriptive or policy-like (display,
//! creators, tags, royalty policy, supply policy); mutation is gated on the
//! mint capability issued at creation. Minted assets reference their
//! collection only by identity, never by live pointer, so a collection can
//! be mutated independently of the assets already out in the world.

use crate::authority::{require_capability, MintCapability};
use crate::domain::{DomainStore, DomainValue};
use curio_core::{CollectionId, CurioResult};
use serde::{Deserialize, Serialize};

/// A collection of unique assets
#[derive(Debug, Serialize, Deserialize)]
pub struct Collection {
    id: CollectionId,
    domains: DomainStore,
}

impl Collection {
    pub(crate) fn new(id: CollectionId) -> Self {
        Self {
            id,
            domains: DomainStore::new(),
        }
    }

    /// The collection's identity
    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Read access to the attached domains
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Attach a domain, gated on the mint capability
    ///
    /// Fails with `Authorization` if the capability is bound to another
    /// collection, or `DuplicateDomain` if the slot is occupied; either way
    /// the collection is left unchanged.
    pub fn attach_domain<D: DomainValue>(
        &mut self,
        cap: &MintCapability,
        value: D,
    ) -> CurioResult<()> {
        require_capability(cap, self)?;
        self.domains.attach(value)?;
        tracing::debug!(collection = %self.id, domain = %D::KIND, "attached domain");
        Ok(())
    }

    /// Replace a domain unconditionally, gated on the mint capability
    ///
    /// Returns the evicted value if the slot was occupied. Used only where
    /// upsert semantics are intended; every attachment in the core flows is
    /// first-write via [`Collection::attach_domain`].
    pub fn replace_domain<D: DomainValue>(
        &mut self,
        cap: &MintCapability,
        value: D,
    ) -> CurioResult<Option<D>> {
        require_capability(cap, self)?;
        let evicted = self.domains.replace(value);
        tracing::debug!(collection = %self.id, domain = %D::KIND, "replaced domain");
        Ok(evicted)
    }
}
