//! Descriptive metadata domains: display, symbol, url, attributes

use curio_core::{CurioError, CurioResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display name and description of a collection or asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDomain {
    name: String,
    description: String,
}

impl DisplayDomain {
    /// Create a display domain
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The long-form description
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Ticker-style symbol of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDomain {
    symbol: String,
}

impl SymbolDomain {
    /// Create a symbol domain
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The symbol text
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Website or image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDomain {
    url: String,
}

impl UrlDomain {
    /// Create a url domain
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The URL text
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Arbitrary string-keyed attribute pairs on an asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributesDomain {
    attributes: BTreeMap<String, String>,
}

impl AttributesDomain {
    /// Create an attributes domain from a prepared map
    pub fn new(attributes: BTreeMap<String, String>) -> Self {
        Self { attributes }
    }

    /// Create an attributes domain from parallel key and value lists
    ///
    /// Fails with [`CurioError::Invalid`] if the lists differ in length.
    pub fn from_pairs(keys: Vec<String>, values: Vec<String>) -> CurioResult<Self> {
        if keys.len() != values.len() {
            return Err(CurioError::invalid(format!(
                "attribute keys and values differ in length: {} vs {}",
                keys.len(),
                values.len()
            )));
        }
        Ok(Self {
            attributes: keys.into_iter().zip(values).collect(),
        })
    }

    /// Look up one attribute
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Iterate all attributes in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the attribute map is empty
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn attributes_from_pairs() {
        let attrs = AttributesDomain::from_pairs(
            vec!["depth".into(), "hull".into()],
            vec!["11000m".into(), "titanium".into()],
        )
        .unwrap();
        assert_eq!(attrs.get("depth"), Some("11000m"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn mismatched_pairs_are_rejected() {
        let err = AttributesDomain::from_pairs(vec!["depth".into()], vec![]).unwrap_err();
        assert_matches!(err, CurioError::Invalid { .. });
    }
}
