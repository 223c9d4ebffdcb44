//! Source reading data files from a directory on disk.
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use catalog_content::{CatalogManifest, ContentFactory, LoadResult};
use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};
use chrono::Utc;
use tracing::debug;

use super::ContentSource;
use crate::error::{Result, ServiceError};

/// Reads the catalog files from `data_dir` on every request.
///
/// File reads run on the blocking pool.
#[derive(Clone, Debug)]
pub struct DirectoryContentSource {
    data_dir: PathBuf,
    factory: ContentFactory,
}

impl DirectoryContentSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            factory: ContentFactory::new(data_dir.clone()),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read<T, F>(&self, what: &'static str, load: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContentFactory) -> LoadResult<T> + Send + 'static,
    {
        debug!(what, dir = %self.data_dir.display(), "reading catalog content");
        let factory = self.factory.clone();
        tokio::task::spawn_blocking(move || load(&factory))
            .await
            .map_err(ServiceError::unavailable)?
            .map_err(ServiceError::unavailable)
    }
}

#[async_trait]
impl ContentSource for DirectoryContentSource {
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>> {
        self.read(category.plural(), move |factory| factory.load_items(category))
            .await
    }

    async fn warbonds(&self) -> Result<Vec<Warbond>> {
        self.read("warbonds", ContentFactory::load_warbonds).await
    }

    async fn major_order(&self) -> Result<MajorOrder> {
        let now = Utc::now();
        self.read("major order", move |factory| factory.load_major_order(now))
            .await
    }

    async fn war_efforts(&self) -> Result<Vec<WarEffort>> {
        self.read("war efforts", ContentFactory::load_war_efforts)
            .await
    }

    async fn manifest(&self) -> Result<CatalogManifest> {
        self.read("manifest", ContentFactory::load_manifest).await
    }
}
