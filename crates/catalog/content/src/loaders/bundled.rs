//! Sample dataset compiled into the crate.
use crate::files;

pub(crate) fn file(name: &str) -> Option<&'static str> {
    let content = match name {
        files::MANIFEST => include_str!("../../data/manifest.toml"),
        files::ARMOR => include_str!("../../data/armor.ron"),
        files::WEAPONS => include_str!("../../data/weapons.ron"),
        files::STRATEGEMS => include_str!("../../data/strategems.ron"),
        files::BOOSTERS => include_str!("../../data/boosters.ron"),
        files::WARBONDS => include_str!("../../data/warbonds.ron"),
        files::WAR_EFFORTS => include_str!("../../data/war_efforts.ron"),
        files::MAJOR_ORDER => include_str!("../../data/major_order.ron"),
        _ => return None,
    };
    Some(content)
}
