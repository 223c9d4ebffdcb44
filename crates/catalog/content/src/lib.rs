//! Data-driven catalog content and loaders.
//!
//! This crate houses the sample dataset and the loaders that read it:
//! - Item collections per category (data-driven via RON)
//! - Warbond progression tracks (data-driven via RON)
//! - War efforts and the major order (data-driven via RON)
//! - Dataset manifest with name and version (data-driven via TOML)
//!
//! The sample dataset under `data/` is compiled into the crate, so a
//! [`ContentFactory::bundled`] source never touches the filesystem. The same
//! files can be pointed at on disk with [`ContentFactory::new`].
//!
//! All loaders use catalog-core types directly with serde for RON/TOML deserialization.

pub mod files;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogManifest, ContentFactory, ItemLoader, LoadResult, MajorOrderLoader, MajorOrderSpec,
    ManifestLoader, WarEffortLoader, WarbondLoader,
};
