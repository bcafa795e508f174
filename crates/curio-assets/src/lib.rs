//! Curio Assets - capability-gated collections and minting
//!
//! This crate owns the collection side of the engine:
//!
//! - the capability authority ([`create_collection`], [`MintCapability`],
//!   [`require_capability`]) — possession of the capability value, not the
//!   caller's identity, is what authorizes mutation;
//! - the type-indexed [`domain`] attachment store and the domain types a
//!   collection or asset can carry (display, url, attributes, creators,
//!   tags, royalty policy, supply policy);
//! - [`Asset`] and the [`AssetRegistry`] with the plain [`AssetRegistry::mint`]
//!   and the composite [`AssetRegistry::mint_nft`] operations.
//!
//! The market side (inventories, listings, royalty settlement) lives in
//! `curio-market` and plugs into minting through the [`AssetSink`] seam.

#![forbid(unsafe_code)]

/// Collection creation and the unforgeable mint capability
pub mod authority;

/// Domain attachment store and domain types
pub mod domain;

/// The collection shared resource
pub mod collection;

/// Minted assets
pub mod asset;

/// Asset registry: mint and mint_nft
pub mod registry;

pub use asset::Asset;
pub use authority::{create_collection, require_capability, MintCapability};
pub use collection::Collection;
pub use domain::{
    AttributesDomain, BasisPoints, CreatorsDomain, DisplayDomain, Domain, DomainKind, DomainStore,
    DomainValue, RoyaltyPolicy, RoyaltyStrategy, SupplyPolicy, SymbolDomain, Tag, TagsDomain,
    UrlDomain,
};
pub use registry::{AssetRegistry, AssetSink, MintRequest};
