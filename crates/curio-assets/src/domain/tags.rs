//! Curated tag set domain

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Curated tags describing what kind of collectible a collection holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tag {
    /// Visual art
    Art,
    /// Profile picture collections
    ProfilePicture,
    /// General collectibles
    Collectible,
    /// In-game assets
    GameAsset,
    /// Tokenised real-world assets
    TokenisedAsset,
    /// Ticker symbols
    Ticker,
    /// Domain names
    DomainName,
    /// Music
    Music,
    /// Video
    Video,
    /// Event tickets
    Ticket,
    /// Licenses
    License,
}

impl Tag {
    /// All known tags, in declaration order
    pub const ALL: [Tag; 11] = [
        Tag::Art,
        Tag::ProfilePicture,
        Tag::Collectible,
        Tag::GameAsset,
        Tag::TokenisedAsset,
        Tag::Ticker,
        Tag::DomainName,
        Tag::Music,
        Tag::Video,
        Tag::Ticket,
        Tag::License,
    ];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Art => "Art",
            Tag::ProfilePicture => "ProfilePicture",
            Tag::Collectible => "Collectible",
            Tag::GameAsset => "GameAsset",
            Tag::TokenisedAsset => "TokenisedAsset",
            Tag::Ticker => "Ticker",
            Tag::DomainName => "DomainName",
            Tag::Music => "Music",
            Tag::Video => "Video",
            Tag::Ticket => "Ticket",
            Tag::License => "License",
        };
        f.write_str(name)
    }
}

/// The set of tags attached to a collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsDomain {
    tags: BTreeSet<Tag>,
}

impl TagsDomain {
    /// Create a tags domain from any tag iterator; duplicates collapse
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Whether the tag is present
    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Iterate tags in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no tag is attached
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tags_collapse() {
        let tags = TagsDomain::new([Tag::Art, Tag::Art, Tag::Collectible]);
        assert_eq!(tags.len(), 2);
        assert!(tags.contains(Tag::Art));
        assert!(!tags.contains(Tag::Music));
    }
}
