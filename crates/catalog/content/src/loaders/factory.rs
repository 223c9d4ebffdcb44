//! Content factory for reading the catalog from data files.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};
use chrono::{DateTime, Utc};

use crate::files;
use crate::loaders::{
    CatalogManifest, ItemLoader, LoadResult, MajorOrderLoader, ManifestLoader, WarEffortLoader,
    WarbondLoader, bundled, read_file,
};

/// Where a factory reads its files from.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ContentOrigin {
    /// Sample dataset compiled into the binary.
    Bundled,
    /// A data directory on disk.
    Directory(PathBuf),
}

/// Content factory that loads the whole catalog from one origin.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── manifest.toml
/// ├── armor.ron
/// ├── weapons.ron
/// ├── strategems.ron
/// ├── boosters.ron
/// ├── warbonds.ron
/// ├── war_efforts.ron
/// └── major_order.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    origin: ContentOrigin,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            origin: ContentOrigin::Directory(data_dir.into()),
        }
    }

    /// Creates a factory over the compiled-in sample dataset.
    pub fn bundled() -> Self {
        Self {
            origin: ContentOrigin::Bundled,
        }
    }

    /// Returns the data directory path, if reading from disk.
    pub fn data_dir(&self) -> Option<&Path> {
        match &self.origin {
            ContentOrigin::Directory(dir) => Some(dir),
            ContentOrigin::Bundled => None,
        }
    }

    /// Load dataset name and version from `manifest.toml`.
    pub fn load_manifest(&self) -> LoadResult<CatalogManifest> {
        ManifestLoader::parse(&self.read(files::MANIFEST)?)
    }

    /// Load one category's items from its RON file.
    pub fn load_items(&self, category: ItemCategory) -> LoadResult<Vec<Item>> {
        ItemLoader::parse(&self.read(files::category_file(category))?, category)
    }

    /// Load warbonds from `warbonds.ron`.
    ///
    /// Page item lists are left as stored; the catalog store fills them in.
    pub fn load_warbonds(&self) -> LoadResult<Vec<Warbond>> {
        WarbondLoader::parse(&self.read(files::WARBONDS)?)
    }

    /// Load active campaigns from `war_efforts.ron`.
    pub fn load_war_efforts(&self) -> LoadResult<Vec<WarEffort>> {
        WarEffortLoader::parse(&self.read(files::WAR_EFFORTS)?)
    }

    /// Load the major order from `major_order.ron`, anchoring its expiry at `now`.
    pub fn load_major_order(&self, now: DateTime<Utc>) -> LoadResult<MajorOrder> {
        MajorOrderLoader::parse(&self.read(files::MAJOR_ORDER)?, now)
    }

    fn read(&self, name: &str) -> LoadResult<Cow<'static, str>> {
        match &self.origin {
            ContentOrigin::Bundled => bundled::file(name)
                .map(Cow::Borrowed)
                .ok_or_else(|| anyhow::anyhow!("No bundled data file named {}", name)),
            ContentOrigin::Directory(dir) => read_file(&dir.join(name)).map(Cow::Owned),
        }
    }
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self::bundled()
    }
}
