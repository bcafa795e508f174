//! Collection creation and the unforgeable mint capability
//!
//! The capability value itself is the proof of authority: it is move-only
//! (no `Clone`, no `Copy`, no `Default`, no serde) and constructible only
//! inside this module, so exactly one live capability exists per collection
//! at creation. Transferring it is a plain ownership move; duplicating it is
//! impossible by construction. Authorization is never inferred from the
//! caller's address.

use crate::collection::Collection;
use curio_core::{CollectionId, CurioError, CurioResult};

/// The sole authorization to mutate a collection or mint assets into it
///
/// Bound 1:1 to the identity of the collection it was created with.
#[derive(Debug)]
pub struct MintCapability {
    collection: CollectionId,
}

impl MintCapability {
    /// The collection identity this capability is bound to
    pub fn collection(&self) -> CollectionId {
        self.collection
    }
}

/// Create a collection together with its one mint capability
pub fn create_collection() -> (Collection, MintCapability) {
    let id = CollectionId::new();
    tracing::debug!(collection = %id, "created collection");
    (Collection::new(id), MintCapability { collection: id })
}

/// Verify that `cap` is bound to `collection`'s identity
///
/// Fails with [`CurioError::Authorization`] on mismatch. Gated operations
/// call this before touching any state, so a failed check leaves the target
/// unchanged.
pub fn require_capability(cap: &MintCapability, collection: &Collection) -> CurioResult<()> {
    if cap.collection() != collection.id() {
        return Err(CurioError::authorization(format!(
            "mint capability is bound to {}, not {}",
            cap.collection(),
            collection.id()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use curio_core::CurioError;

    #[test]
    fn capability_is_bound_to_its_collection() {
        let (collection, cap) = create_collection();
        assert_eq!(cap.collection(), collection.id());
        assert!(require_capability(&cap, &collection).is_ok());
    }

    #[test]
    fn foreign_capability_is_rejected() {
        let (collection, _cap) = create_collection();
        let (_other, other_cap) = create_collection();
        assert_matches!(
            require_capability(&other_cap, &collection),
            Err(CurioError::Authorization { .. })
        );
    }
}
