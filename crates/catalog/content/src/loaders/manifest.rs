//! Dataset manifest loader.

use serde::{Deserialize, Serialize};

use crate::loaders::LoadResult;

/// Name and version of a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub name: String,
    pub version: u32,
}

/// Loader for the dataset manifest from TOML files.
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn parse(content: &str) -> LoadResult<CatalogManifest> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse manifest TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest() {
        let manifest = ManifestLoader::parse("name = \"test\"\nversion = 3\n").unwrap();
        assert_eq!(
            manifest,
            CatalogManifest {
                name: "test".into(),
                version: 3
            }
        );
    }

    #[test]
    fn rejects_missing_version() {
        assert!(ManifestLoader::parse("name = \"test\"\n").is_err());
    }
}
