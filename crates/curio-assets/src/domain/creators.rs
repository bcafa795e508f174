//! Creator address list domain

use curio_core::{Address, CurioError, CurioResult};
use serde::{Deserialize, Serialize};

/// The addresses credited as creators of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorsDomain {
    creators: Vec<Address>,
}

impl CreatorsDomain {
    /// Create a creators domain
    ///
    /// Fails with [`CurioError::Invalid`] on an empty list; a collection
    /// with a creators domain always names at least one creator.
    pub fn new(creators: Vec<Address>) -> CurioResult<Self> {
        if creators.is_empty() {
            return Err(CurioError::invalid("creator list must not be empty"));
        }
        Ok(Self { creators })
    }

    /// The creator addresses, in attachment order
    pub fn creators(&self) -> &[Address] {
        &self.creators
    }

    /// Whether the address is credited as a creator
    pub fn contains(&self, address: &Address) -> bool {
        self.creators.contains(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn creators_are_kept_in_order() {
        let a = Address::from_bytes([1u8; 20]);
        let b = Address::from_bytes([2u8; 20]);
        let creators = CreatorsDomain::new(vec![a, b]).unwrap();
        assert_eq!(creators.creators(), &[a, b]);
        assert!(creators.contains(&a));
    }

    #[test]
    fn empty_creator_list_is_rejected() {
        assert_matches!(
            CreatorsDomain::new(Vec::new()),
            Err(CurioError::Invalid { .. })
        );
    }
}
