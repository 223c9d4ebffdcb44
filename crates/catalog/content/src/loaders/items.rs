//! Item collection loader.

use catalog_core::{Item, ItemCategory};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron};

/// Item collection structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

/// Loader for one category's items from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Parse a category's items from RON text.
    ///
    /// Fails if any item's kind does not belong to `category`.
    pub fn parse(content: &str, category: ItemCategory) -> LoadResult<Vec<Item>> {
        let catalog: ItemCatalog = parse_ron(content, category.plural())?;

        if let Some(stray) = catalog.items.iter().find(|item| item.category() != category) {
            anyhow::bail!(
                "Item {} is a {} but was listed with {}",
                stray.id,
                stray.category(),
                category.plural()
            );
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_BOOSTER: &str = r#"(
        items: [
            (
                id: "booster_9",
                name: "Hellpod Space Optimization",
                description: "Hellpods arrive with full ammo",
                warbond_id: "helldivers_mobilize",
                warbond_page: 1,
                cost: (medals: 60, requisition: Some(500)),
                unlocked: false,
                kind: Booster((
                    effect: "Full resupply on deployment",
                    duration: 0,
                    stackable: true,
                    effects: [],
                )),
            ),
        ],
    )"#;

    #[test]
    fn parses_items_of_matching_category() {
        let items = ItemLoader::parse(ONE_BOOSTER, ItemCategory::Booster).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cost.requisition, Some(500));
        assert_eq!(items[0].cost.samples, None);
        assert!(items[0].as_booster().unwrap().stackable);
    }

    #[test]
    fn rejects_items_filed_under_the_wrong_category() {
        let err = ItemLoader::parse(ONE_BOOSTER, ItemCategory::Armor).unwrap_err();
        assert!(err.to_string().contains("booster_9"));
    }

    #[test]
    fn reports_malformed_ron() {
        let err = ItemLoader::parse("(items: [", ItemCategory::Armor).unwrap_err();
        assert!(err.to_string().contains("armor RON"));
    }
}
