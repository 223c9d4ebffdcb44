//! Item records and their category-specific data.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the attributes every catalog entry shares (id, name, cost,
//!   warbond back-reference, unlock flag)
//! - [`ItemKind`] holds the category-specific data (armor stats, weapon stats,
//!   strategem timings, booster effects)
//!
//! Consumers branch on `kind` with an exhaustive `match`; there is no string
//! type tag to inspect.

use crate::ids::{ItemId, WarbondId};

/// The four item categories, in the fixed order used for cross-category lookups.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemCategory {
    Armor,
    Weapon,
    Strategem,
    Booster,
}

impl ItemCategory {
    /// Every category, in lookup order.
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Armor,
        ItemCategory::Weapon,
        ItemCategory::Strategem,
        ItemCategory::Booster,
    ];

    /// Plural label used for collection headings and data file names.
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapon => "weapons",
            Self::Strategem => "strategems",
            Self::Booster => "boosters",
        }
    }
}

/// Medal price plus optional secondary currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub medals: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requisition: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub samples: Option<u32>,
}

impl Cost {
    pub const fn medals(medals: u32) -> Self {
        Self {
            medals,
            requisition: None,
            samples: None,
        }
    }
}

/// A catalog entry: shared attributes plus category-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub warbond_id: WarbondId,
    /// 1-based page within the owning warbond.
    pub warbond_page: u32,
    pub cost: Cost,
    pub unlocked: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    pub fn as_armor(&self) -> Option<&ArmorData> {
        match &self.kind {
            ItemKind::Armor(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_strategem(&self) -> Option<&StrategemData> {
        match &self.kind {
            ItemKind::Strategem(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_booster(&self) -> Option<&BoosterData> {
        match &self.kind {
            ItemKind::Booster(data) => Some(data),
            _ => None,
        }
    }
}

/// Category-specific item data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Armor(ArmorData),
    Weapon(WeaponData),
    Strategem(StrategemData),
    Booster(BoosterData),
}

impl ItemKind {
    pub const fn category(&self) -> ItemCategory {
        match self {
            Self::Armor(_) => ItemCategory::Armor,
            Self::Weapon(_) => ItemCategory::Weapon,
            Self::Strategem(_) => ItemCategory::Strategem,
            Self::Booster(_) => ItemCategory::Booster,
        }
    }
}

// ============================================================================
// Armor
// ============================================================================

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorClass {
    Light,
    Medium,
    Heavy,
}

/// Category tag of an armor trait; also accepted as a trait selector in filters.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorTraitKind {
    GrenadeCapacity,
    StimCapacity,
    AmmoCapacity,
    ArmorRating,
    Speed,
    Stamina,
    Resistance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorTrait {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Magnitude of the trait (e.g. `2` extra grenades, `25` percent resistance).
    pub value: i32,
    pub kind: ArmorTraitKind,
}

/// Damage reduction percentages per damage source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resistances {
    pub fire: u8,
    pub explosion: u8,
    pub acid: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub class: ArmorClass,
    /// 0..=100.
    pub armor_rating: u8,
    /// Signed percentage applied to movement speed.
    pub speed_modifier: i16,
    /// Signed percentage applied to stamina regeneration.
    pub stamina_regen_modifier: i16,
    pub traits: Vec<ArmorTrait>,
    pub resistances: Resistances,
}

// ============================================================================
// Weapon
// ============================================================================

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponClass {
    Primary,
    Secondary,
    Melee,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    Kinetic,
    Explosive,
    Fire,
    Acid,
    Electric,
    Laser,
}

/// Armor-penetration tier, ordered from weakest to strongest.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Penetration {
    None,
    Light,
    Medium,
    Heavy,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponTraitKind {
    Penetration,
    Damage,
    FireRate,
    Accuracy,
    Special,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTrait {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: WeaponTraitKind,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub class: WeaponClass,
    pub damage: u32,
    pub damage_type: DamageType,
    pub penetration: Penetration,
    /// Rounds per minute.
    pub fire_rate: u32,
    pub magazine_size: u32,
    pub total_ammo: u32,
    /// Seconds.
    pub reload_time: f32,
    /// Effective range in meters.
    pub range: u32,
    /// 0..=100.
    pub accuracy: u8,
    /// 0..=100.
    pub recoil: u8,
    pub traits: Vec<WeaponTrait>,
}

// ============================================================================
// Strategem
// ============================================================================

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StrategemClass {
    Offensive,
    Defensive,
    Support,
    Utility,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategemEffect {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Seconds, when the effect lingers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
    /// Meters, when the effect has an area.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategemData {
    pub class: StrategemClass,
    /// Seconds.
    pub cooldown: u32,
    /// Uses per mission.
    pub uses: u32,
    /// Seconds to input the call-in code.
    pub call_time: u32,
    pub effects: Vec<StrategemEffect>,
}

// ============================================================================
// Booster
// ============================================================================

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BoosterEffectKind {
    Damage,
    Armor,
    Speed,
    Stamina,
    Ammo,
    Special,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoosterEffect {
    pub id: String,
    pub name: String,
    pub description: String,
    pub value: i32,
    pub kind: BoosterEffectKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoosterData {
    /// One-line summary of what the booster does.
    pub effect: String,
    /// Seconds; `0` means the booster lasts the whole mission.
    pub duration: u32,
    pub stackable: bool,
    pub effects: Vec<BoosterEffect>,
}

impl BoosterData {
    pub const fn lasts_whole_mission(&self) -> bool {
        self.duration == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn categories_parse_case_insensitively() {
        assert_eq!(
            ItemCategory::from_str("Strategem").unwrap(),
            ItemCategory::Strategem
        );
        assert_eq!(ArmorClass::from_str("HEAVY").unwrap(), ArmorClass::Heavy);
        assert_eq!(
            ArmorTraitKind::from_str("grenade_capacity").unwrap(),
            ArmorTraitKind::GrenadeCapacity
        );
        assert!(DamageType::from_str("plasma").is_err());
    }

    #[test]
    fn kind_reports_its_category() {
        let kind = ItemKind::Booster(BoosterData {
            effect: "Enhanced stamina regeneration".into(),
            duration: 0,
            stackable: false,
            effects: vec![],
        });
        assert_eq!(kind.category(), ItemCategory::Booster);
    }

    #[test]
    fn penetration_tiers_are_ordered() {
        assert!(Penetration::None < Penetration::Light);
        assert!(Penetration::Medium < Penetration::Heavy);
    }
}
