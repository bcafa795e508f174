//! Domain attachment store and domain types
//!
//! A domain is a typed attribute bundle attachable at most once per type to
//! a collection or an asset. The store is keyed by a domain's type tag
//! ([`DomainKind`]), not by an arbitrary string, so a target can never
//! accidentally carry two instances of the same structured field.

use serde::{Deserialize, Serialize};
use std::fmt;

mod creators;
mod metadata;
mod royalty;
mod store;
mod supply;
mod tags;

pub use creators::CreatorsDomain;
pub use metadata::{AttributesDomain, DisplayDomain, SymbolDomain, UrlDomain};
pub use royalty::{BasisPoints, RoyaltyPolicy, RoyaltyStrategy};
pub use store::DomainStore;
pub use supply::SupplyPolicy;
pub use tags::{Tag, TagsDomain};

/// Type tag identifying one domain slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DomainKind {
    /// Display name and description
    Display,
    /// Ticker-style collection symbol
    Symbol,
    /// Website or image URL
    Url,
    /// Arbitrary string-keyed attribute pairs
    Attributes,
    /// Creator address list
    Creators,
    /// Curated tag set
    Tags,
    /// Royalty policy applied to every trade
    Royalty,
    /// Mint supply policy
    Supply,
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DomainKind::Display => "display",
            DomainKind::Symbol => "symbol",
            DomainKind::Url => "url",
            DomainKind::Attributes => "attributes",
            DomainKind::Creators => "creators",
            DomainKind::Tags => "tags",
            DomainKind::Royalty => "royalty",
            DomainKind::Supply => "supply",
        };
        f.write_str(name)
    }
}

/// A dynamically typed domain value, as held by a [`DomainStore`] slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// Display name and description
    Display(DisplayDomain),
    /// Ticker-style collection symbol
    Symbol(SymbolDomain),
    /// Website or image URL
    Url(UrlDomain),
    /// Arbitrary string-keyed attribute pairs
    Attributes(AttributesDomain),
    /// Creator address list
    Creators(CreatorsDomain),
    /// Curated tag set
    Tags(TagsDomain),
    /// Royalty policy applied to every trade
    Royalty(RoyaltyPolicy),
    /// Mint supply policy
    Supply(SupplyPolicy),
}

impl Domain {
    /// The type tag of this value
    pub fn kind(&self) -> DomainKind {
        match self {
            Domain::Display(_) => DomainKind::Display,
            Domain::Symbol(_) => DomainKind::Symbol,
            Domain::Url(_) => DomainKind::Url,
            Domain::Attributes(_) => DomainKind::Attributes,
            Domain::Creators(_) => DomainKind::Creators,
            Domain::Tags(_) => DomainKind::Tags,
            Domain::Royalty(_) => DomainKind::Royalty,
            Domain::Supply(_) => DomainKind::Supply,
        }
    }
}

/// Typed access to a domain slot
///
/// Implemented by every domain type; gives [`DomainStore`] its statically
/// typed `attach`/`read`/`replace` interface over the [`Domain`] union.
pub trait DomainValue: Sized {
    /// The slot this type occupies
    const KIND: DomainKind;

    /// Wrap as a dynamically typed domain
    fn into_domain(self) -> Domain;

    /// Borrow back out of a dynamically typed domain
    fn from_domain(domain: &Domain) -> Option<&Self>;

    /// Take ownership back out of a dynamically typed domain
    fn from_domain_owned(domain: Domain) -> Option<Self>;
}

macro_rules! impl_domain_value {
    ($ty:ty, $variant:ident) => {
        impl DomainValue for $ty {
            const KIND: DomainKind = DomainKind::$variant;

            fn into_domain(self) -> Domain {
                Domain::$variant(self)
            }

            fn from_domain(domain: &Domain) -> Option<&Self> {
                match domain {
                    Domain::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn from_domain_owned(domain: Domain) -> Option<Self> {
                match domain {
                    Domain::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_domain_value!(DisplayDomain, Display);
impl_domain_value!(SymbolDomain, Symbol);
impl_domain_value!(UrlDomain, Url);
impl_domain_value!(AttributesDomain, Attributes);
impl_domain_value!(CreatorsDomain, Creators);
impl_domain_value!(TagsDomain, Tags);
impl_domain_value!(RoyaltyPolicy, Royalty);
impl_domain_value!(SupplyPolicy, Supply);
