//! The type-indexed single-slot attachment store

use super::{Domain, DomainKind, DomainValue};
use curio_core::{CurioError, CurioResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Heterogeneous attribute store attached to a collection or an asset
///
/// One slot per [`DomainKind`]. Every attachment in the core flows is
/// first-write (`attach`); `replace` exists for callers that genuinely want
/// upsert semantics and always reports what it evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStore {
    slots: BTreeMap<DomainKind, Domain>,
}

impl DomainStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a domain, failing if its slot is already occupied
    ///
    /// The first attachment wins; on [`CurioError::DuplicateDomain`] the
    /// existing value is preserved unmodified.
    pub fn attach<D: DomainValue>(&mut self, value: D) -> CurioResult<()> {
        let domain = value.into_domain();
        let kind = domain.kind();
        if self.slots.contains_key(&kind) {
            return Err(CurioError::duplicate_domain(kind.to_string()));
        }
        self.slots.insert(kind, domain);
        Ok(())
    }

    /// Overwrite a slot unconditionally, returning the evicted value if any
    pub fn replace<D: DomainValue>(&mut self, value: D) -> Option<D> {
        self.slots
            .insert(D::KIND, value.into_domain())
            .and_then(D::from_domain_owned)
    }

    /// Read a domain, failing with [`CurioError::DomainNotFound`] if absent
    pub fn read<D: DomainValue>(&self) -> CurioResult<&D> {
        self.get::<D>()
            .ok_or_else(|| CurioError::domain_not_found(D::KIND.to_string()))
    }

    /// Read a domain, returning `None` if absent
    pub fn get<D: DomainValue>(&self) -> Option<&D> {
        self.slots.get(&D::KIND).and_then(D::from_domain)
    }

    /// Whether a slot of this kind is occupied
    pub fn has(&self, kind: DomainKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// The occupied slots, in kind order
    pub fn kinds(&self) -> impl Iterator<Item = DomainKind> + '_ {
        self.slots.keys().copied()
    }

    /// Number of attached domains
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no domain is attached
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
