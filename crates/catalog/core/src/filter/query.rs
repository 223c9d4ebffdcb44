//! Per-category filter criteria and the unified [`CatalogQuery`].
use crate::filter::{Criteria, NumericRange, TextSearch};
use crate::ids::WarbondId;
use crate::item::{
    ArmorClass, DamageType, Item, ItemCategory, ItemKind, Penetration, StrategemClass,
    WeaponClass,
};

/// Which text fields a search term is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextScope {
    #[default]
    Name,
    NameAndDescription,
}

impl TextScope {
    /// Armor and weapons are searched by name; strategems and boosters also by
    /// description.
    pub const fn for_category(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Armor | ItemCategory::Weapon => Self::Name,
            ItemCategory::Strategem | ItemCategory::Booster => Self::NameAndDescription,
        }
    }
}

/// Fields shared by every category's criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommonFilters {
    pub search_term: String,
    pub category: Option<ItemCategory>,
    pub warbond_id: Option<WarbondId>,
    pub unlocked: Option<bool>,
}

impl CommonFilters {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    pub fn unlocked(unlocked: bool) -> Self {
        Self {
            unlocked: Some(unlocked),
            ..Self::default()
        }
    }

    pub fn matches_in_scope(&self, item: &Item, scope: TextScope) -> bool {
        let search = TextSearch::new(&self.search_term);
        let text_matches = match scope {
            TextScope::Name => search.matches(&item.name),
            TextScope::NameAndDescription => {
                search.matches(&item.name) || search.matches(&item.description)
            }
        };

        text_matches
            && self.category.is_none_or(|category| item.category() == category)
            && self
                .warbond_id
                .as_ref()
                .is_none_or(|warbond| item.warbond_id == *warbond)
            && self.unlocked.is_none_or(|unlocked| item.unlocked == unlocked)
    }
}

impl Criteria for CommonFilters {
    fn matches(&self, item: &Item) -> bool {
        self.matches_in_scope(item, TextScope::Name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArmorFilters {
    pub common: CommonFilters,
    pub class: Option<ArmorClass>,
    /// Trait selectors; each matches a trait by id or by category tag
    /// (`"grenade_capacity_2"` or `"grenade_capacity"`).
    pub traits: Vec<String>,
    pub armor_rating: NumericRange<u8>,
}

impl Criteria for ArmorFilters {
    fn matches(&self, item: &Item) -> bool {
        let Some(armor) = item.as_armor() else {
            return false;
        };

        self.common
            .matches_in_scope(item, TextScope::for_category(ItemCategory::Armor))
            && self.class.is_none_or(|class| armor.class == class)
            && (self.traits.is_empty()
                || armor.traits.iter().any(|armor_trait| {
                    self.traits.iter().any(|selector| {
                        armor_trait.id == *selector
                            || armor_trait.kind.as_ref().eq_ignore_ascii_case(selector)
                    })
                }))
            && self.armor_rating.contains(armor.armor_rating)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeaponFilters {
    pub common: CommonFilters,
    pub class: Option<WeaponClass>,
    pub damage_types: Vec<DamageType>,
    pub penetration: Vec<Penetration>,
    pub damage: NumericRange<u32>,
}

impl Criteria for WeaponFilters {
    fn matches(&self, item: &Item) -> bool {
        let Some(weapon) = item.as_weapon() else {
            return false;
        };

        self.common
            .matches_in_scope(item, TextScope::for_category(ItemCategory::Weapon))
            && self.class.is_none_or(|class| weapon.class == class)
            && (self.damage_types.is_empty() || self.damage_types.contains(&weapon.damage_type))
            && (self.penetration.is_empty() || self.penetration.contains(&weapon.penetration))
            && self.damage.contains(weapon.damage)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrategemFilters {
    pub common: CommonFilters,
    pub class: Option<StrategemClass>,
}

impl Criteria for StrategemFilters {
    fn matches(&self, item: &Item) -> bool {
        let Some(strategem) = item.as_strategem() else {
            return false;
        };

        self.common
            .matches_in_scope(item, TextScope::for_category(ItemCategory::Strategem))
            && self.class.is_none_or(|class| strategem.class == class)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoosterFilters {
    pub common: CommonFilters,
}

impl Criteria for BoosterFilters {
    fn matches(&self, item: &Item) -> bool {
        matches!(item.kind, ItemKind::Booster(_))
            && self
                .common
                .matches_in_scope(item, TextScope::for_category(ItemCategory::Booster))
    }
}

/// Criteria for any one category, dispatched through a single interface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CatalogQuery {
    Armor(ArmorFilters),
    Weapon(WeaponFilters),
    Strategem(StrategemFilters),
    Booster(BoosterFilters),
}

impl CatalogQuery {
    /// An unconstrained query over one category.
    pub fn all(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Armor => Self::Armor(ArmorFilters::default()),
            ItemCategory::Weapon => Self::Weapon(WeaponFilters::default()),
            ItemCategory::Strategem => Self::Strategem(StrategemFilters::default()),
            ItemCategory::Booster => Self::Booster(BoosterFilters::default()),
        }
    }

    pub const fn category(&self) -> ItemCategory {
        match self {
            Self::Armor(_) => ItemCategory::Armor,
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Strategem(_) => ItemCategory::Strategem,
            Self::Booster(_) => ItemCategory::Booster,
        }
    }

    pub fn common(&self) -> &CommonFilters {
        match self {
            Self::Armor(filters) => &filters.common,
            Self::Weapon(filters) => &filters.common,
            Self::Strategem(filters) => &filters.common,
            Self::Booster(filters) => &filters.common,
        }
    }
}

impl Criteria for CatalogQuery {
    fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Armor(filters) => filters.matches(item),
            Self::Weapon(filters) => filters.matches(item),
            Self::Strategem(filters) => filters.matches(item),
            Self::Booster(filters) => filters.matches(item),
        }
    }
}

impl From<ArmorFilters> for CatalogQuery {
    fn from(filters: ArmorFilters) -> Self {
        Self::Armor(filters)
    }
}

impl From<WeaponFilters> for CatalogQuery {
    fn from(filters: WeaponFilters) -> Self {
        Self::Weapon(filters)
    }
}

impl From<StrategemFilters> for CatalogQuery {
    fn from(filters: StrategemFilters) -> Self {
        Self::Strategem(filters)
    }
}

impl From<BoosterFilters> for CatalogQuery {
    fn from(filters: BoosterFilters) -> Self {
        Self::Booster(filters)
    }
}
