//! Warbond loader.

use catalog_core::Warbond;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron};

/// Warbond list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarbondCatalog {
    pub warbonds: Vec<Warbond>,
}

/// Loader for warbonds from RON files.
pub struct WarbondLoader;

impl WarbondLoader {
    pub fn parse(content: &str) -> LoadResult<Vec<Warbond>> {
        let catalog: WarbondCatalog = parse_ron(content, "warbond")?;
        Ok(catalog.warbonds)
    }
}
