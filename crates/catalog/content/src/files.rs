//! File names making up a catalog data directory.
//!
//! ```text
//! data_dir/
//! ├── manifest.toml
//! ├── armor.ron
//! ├── weapons.ron
//! ├── strategems.ron
//! ├── boosters.ron
//! ├── warbonds.ron
//! ├── war_efforts.ron
//! └── major_order.ron
//! ```
use catalog_core::ItemCategory;

pub const MANIFEST: &str = "manifest.toml";
pub const WARBONDS: &str = "warbonds.ron";
pub const WAR_EFFORTS: &str = "war_efforts.ron";
pub const MAJOR_ORDER: &str = "major_order.ron";

pub const ARMOR: &str = "armor.ron";
pub const WEAPONS: &str = "weapons.ron";
pub const STRATEGEMS: &str = "strategems.ron";
pub const BOOSTERS: &str = "boosters.ron";

/// Data file holding one category's items.
pub const fn category_file(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Armor => ARMOR,
        ItemCategory::Weapon => WEAPONS,
        ItemCategory::Strategem => STRATEGEMS,
        ItemCategory::Booster => BOOSTERS,
    }
}
