//! Dataset invariants checked once at load time.
//!
//! A catalog that fails any check is rejected as a whole; nothing downstream
//! re-validates, so every reader may rely on these properties:
//!
//! - item ids are unique across categories, warbond ids are unique
//! - every item's warbond exists and has the item's page
//! - warbond pages are numbered from 1 and strictly ascending
//! - every progress pair has `current <= max`
//! - armor ratings are within 0..=100, hazard levels within 1..=9
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::item::{Item, ItemKind};
use crate::war::{MajorOrder, Progress, WarEffort};
use crate::warbond::Warbond;

const MAX_ARMOR_RATING: u8 = 100;
const HAZARD_LEVELS: std::ops::RangeInclusive<u8> = 1..=9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate item id `{0}`")]
    DuplicateItem(String),

    #[error("duplicate warbond id `{0}`")]
    DuplicateWarbond(String),

    #[error("item `{item}` references unknown warbond `{warbond}`")]
    UnknownWarbond { item: String, warbond: String },

    #[error("item `{item}` references missing page {page} of warbond `{warbond}`")]
    UnknownPage {
        item: String,
        warbond: String,
        page: u32,
    },

    #[error("warbond `{warbond}` pages are not strictly ascending from 1 (found {found})")]
    UnorderedPages { warbond: String, found: u32 },

    #[error("{context}: progress {current} exceeds maximum {max}")]
    ProgressOverflow {
        context: String,
        current: u64,
        max: u64,
    },

    #[error("item `{item}` has armor rating {rating} above 100")]
    ArmorRating { item: String, rating: u8 },

    #[error("planet `{planet}` has hazard level {level} outside 1..=9")]
    HazardLevel { planet: String, level: u8 },
}

/// Validates items against warbonds and each other.
pub fn validate_catalog<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    warbonds: &[Warbond],
) -> Result<(), ValidationError> {
    let mut pages_by_warbond: HashMap<&str, HashSet<u32>> = HashMap::new();
    for warbond in warbonds {
        validate_pages(warbond)?;
        let pages = warbond.pages.iter().map(|page| page.page_number).collect();
        if pages_by_warbond
            .insert(warbond.id.as_str(), pages)
            .is_some()
        {
            return Err(ValidationError::DuplicateWarbond(warbond.id.to_string()));
        }
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateItem(item.id.to_string()));
        }

        let Some(pages) = pages_by_warbond.get(item.warbond_id.as_str()) else {
            return Err(ValidationError::UnknownWarbond {
                item: item.id.to_string(),
                warbond: item.warbond_id.to_string(),
            });
        };
        if !pages.contains(&item.warbond_page) {
            return Err(ValidationError::UnknownPage {
                item: item.id.to_string(),
                warbond: item.warbond_id.to_string(),
                page: item.warbond_page,
            });
        }

        if let ItemKind::Armor(armor) = &item.kind
            && armor.armor_rating > MAX_ARMOR_RATING
        {
            return Err(ValidationError::ArmorRating {
                item: item.id.to_string(),
                rating: armor.armor_rating,
            });
        }
    }

    Ok(())
}

fn validate_pages(warbond: &Warbond) -> Result<(), ValidationError> {
    let mut previous = 0;
    for page in &warbond.pages {
        if page.page_number <= previous {
            return Err(ValidationError::UnorderedPages {
                warbond: warbond.id.to_string(),
                found: page.page_number,
            });
        }
        previous = page.page_number;
    }
    Ok(())
}

/// Validates progress pairs and hazard levels of every campaign.
pub fn validate_war_efforts(efforts: &[WarEffort]) -> Result<(), ValidationError> {
    for effort in efforts {
        if !HAZARD_LEVELS.contains(&effort.planet.hazard_level) {
            return Err(ValidationError::HazardLevel {
                planet: effort.planet.id.clone(),
                level: effort.planet.hazard_level,
            });
        }
        check_progress(&effort.progress, || format!("war effort `{}`", effort.id))?;
        for objective in &effort.objectives {
            check_progress(&objective.progress, || {
                format!("objective `{}` of `{}`", objective.id, effort.id)
            })?;
        }
    }
    Ok(())
}

pub fn validate_major_order(order: &MajorOrder) -> Result<(), ValidationError> {
    check_progress(&order.progress, || format!("major order `{}`", order.id))
}

fn check_progress(
    progress: &Progress,
    context: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    if progress.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::ProgressOverflow {
            context: context(),
            current: progress.current,
            max: progress.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{BoosterData, Cost};
    use crate::war::{Planet, WarStatus};
    use crate::warbond::WarbondPage;

    fn warbond(id: &str, pages: &[u32]) -> Warbond {
        Warbond {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            total_medals: 1000,
            unlocked: true,
            pages: pages
                .iter()
                .map(|&page_number| WarbondPage {
                    page_number,
                    name: format!("Page {page_number}"),
                    required_medals: 0,
                    items: vec![],
                })
                .collect(),
        }
    }

    fn booster(id: &str, warbond: &str, page: u32) -> Item {
        Item {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            warbond_id: warbond.into(),
            warbond_page: page,
            cost: Cost::medals(50),
            unlocked: true,
            kind: ItemKind::Booster(BoosterData {
                effect: String::new(),
                duration: 0,
                stackable: false,
                effects: vec![],
            }),
        }
    }

    #[test]
    fn accepts_consistent_catalog() {
        let warbonds = [warbond("a", &[1, 2])];
        let items = [booster("x", "a", 1), booster("y", "a", 2)];
        assert_eq!(validate_catalog(&items, &warbonds), Ok(()));
    }

    #[test]
    fn rejects_dangling_warbond_reference() {
        let warbonds = [warbond("a", &[1])];
        let items = [booster("x", "missing", 1)];
        assert!(matches!(
            validate_catalog(&items, &warbonds),
            Err(ValidationError::UnknownWarbond { .. })
        ));
    }

    #[test]
    fn rejects_missing_page_and_duplicates() {
        let warbonds = [warbond("a", &[1])];
        assert!(matches!(
            validate_catalog(&[booster("x", "a", 2)], &warbonds),
            Err(ValidationError::UnknownPage { page: 2, .. })
        ));
        assert_eq!(
            validate_catalog(&[booster("x", "a", 1), booster("x", "a", 1)], &warbonds),
            Err(ValidationError::DuplicateItem("x".into()))
        );
        assert_eq!(
            validate_catalog(std::iter::empty(), &[warbond("a", &[1]), warbond("a", &[1])]),
            Err(ValidationError::DuplicateWarbond("a".into()))
        );
    }

    #[test]
    fn rejects_unordered_pages() {
        let warbonds = [warbond("a", &[2, 1])];
        assert!(matches!(
            validate_catalog(std::iter::empty(), &warbonds),
            Err(ValidationError::UnorderedPages { found: 1, .. })
        ));
        assert!(validate_catalog(std::iter::empty(), &[warbond("b", &[0])]).is_err());
    }

    #[test]
    fn rejects_progress_overflow_and_bad_hazard() {
        let mut effort = WarEffort {
            id: "effort_1".into(),
            planet: Planet {
                id: "veld".into(),
                name: "Veld".into(),
                biome: "Desert".into(),
                hazard_level: 7,
            },
            helldiver_count: 10,
            progress: Progress::new(10, 5),
            status: WarStatus::Active,
            objectives: vec![],
        };
        assert!(matches!(
            validate_war_efforts(std::slice::from_ref(&effort)),
            Err(ValidationError::ProgressOverflow { current: 10, .. })
        ));

        effort.progress = Progress::new(1, 5);
        effort.planet.hazard_level = 10;
        assert!(matches!(
            validate_war_efforts(&[effort]),
            Err(ValidationError::HazardLevel { level: 10, .. })
        ));
    }
}
