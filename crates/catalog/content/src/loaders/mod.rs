//! Content loaders for reading catalog data from files.
//!
//! Each loader parses one file's text; the [`ContentFactory`] picks that text
//! from disk or from the bundled dataset.

mod bundled;
pub mod factory;
pub mod items;
pub mod manifest;
pub mod war;
pub mod warbonds;

pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use manifest::{CatalogManifest, ManifestLoader};
pub use war::{MajorOrderLoader, MajorOrderSpec, WarEffortLoader};
pub use warbonds::WarbondLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Helper function to deserialize RON content, naming what failed to parse.
pub(crate) fn parse_ron<T: serde::de::DeserializeOwned>(
    content: &str,
    what: &str,
) -> LoadResult<T> {
    ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e))
}
