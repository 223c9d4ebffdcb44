//! Asynchronous abstraction over where catalog content comes from.
//!
//! The store and dashboard only ever talk to a [`ContentSource`], so the
//! bundled dataset, a data directory, and test fixtures are interchangeable.
mod bundled;
mod directory;
mod timeout;

use std::sync::Arc;

use async_trait::async_trait;
use catalog_content::CatalogManifest;
use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};

use crate::error::Result;

pub use bundled::BundledContentSource;
pub use directory::DirectoryContentSource;
pub use timeout::TimeoutContentSource;

/// Trait for fetching raw catalog content.
///
/// Implementations return records exactly as stored; validation and warbond
/// page population happen in the store.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every item of one category, in dataset order.
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>>;

    async fn warbonds(&self) -> Result<Vec<Warbond>>;

    /// Fetch the current major order, with its expiry anchored at fetch time.
    async fn major_order(&self) -> Result<MajorOrder>;

    async fn war_efforts(&self) -> Result<Vec<WarEffort>>;

    async fn manifest(&self) -> Result<CatalogManifest>;
}

#[async_trait]
impl<S: ContentSource + ?Sized> ContentSource for Arc<S> {
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>> {
        (**self).category(category).await
    }

    async fn warbonds(&self) -> Result<Vec<Warbond>> {
        (**self).warbonds().await
    }

    async fn major_order(&self) -> Result<MajorOrder> {
        (**self).major_order().await
    }

    async fn war_efforts(&self) -> Result<Vec<WarEffort>> {
        (**self).war_efforts().await
    }

    async fn manifest(&self) -> Result<CatalogManifest> {
        (**self).manifest().await
    }
}
