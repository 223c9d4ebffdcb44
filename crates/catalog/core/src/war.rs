//! Galactic war records: planet campaigns and the major order.
use chrono::{DateTime, Utc};

/// A `current / max` progress pair. Valid pairs satisfy `current <= max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub current: u64,
    pub max: u64,
}

impl Progress {
    pub const fn new(current: u64, max: u64) -> Self {
        Self { current, max }
    }

    pub const fn is_valid(&self) -> bool {
        self.current <= self.max
    }

    pub const fn is_complete(&self) -> bool {
        self.max > 0 && self.current >= self.max
    }

    /// Completion in percent (0.0..=100.0). An empty ceiling reports 0.
    pub fn percent(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current.min(self.max) as f64 / self.max as f64) * 100.0
    }
}

/// Difficulty grouping of a 1..=9 hazard level.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum HazardBand {
    Low,
    Medium,
    High,
    Extreme,
}

impl HazardBand {
    pub const fn from_level(level: u8) -> Self {
        match level {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            7..=8 => Self::High,
            _ => Self::Extreme,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub biome: String,
    /// 1..=9.
    pub hazard_level: u8,
}

impl Planet {
    pub const fn hazard_band(&self) -> HazardBand {
        HazardBand::from_level(self.hazard_level)
    }
}

/// Lightweight planet reference carried by a major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetRef {
    pub id: String,
    pub name: String,
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
pub enum WarStatus {
    Active,
    Completed,
    Defeated,
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
pub enum ObjectiveKind {
    Liberate,
    Defend,
    Attack,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: Progress,
    pub kind: ObjectiveKind,
}

/// A campaign on one planet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarEffort {
    pub id: String,
    pub planet: Planet,
    /// Players currently deployed on the planet.
    pub helldiver_count: u64,
    pub progress: Progress,
    pub status: WarStatus,
    pub objectives: Vec<Objective>,
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
pub enum RewardKind {
    Medals,
    Requisition,
    Samples,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub kind: RewardKind,
    pub amount: u32,
}

/// The singleton, time-bounded directive for all players.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajorOrder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub briefing: String,
    pub progress: Progress,
    pub reward: Reward,
    pub expires_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub planet: Option<PlanetRef>,
}

impl MajorOrder {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_and_partial_progress() {
        assert_eq!(Progress::new(0, 0).percent(), 0.0);
        assert_eq!(Progress::new(45, 100).percent(), 45.0);
        assert_eq!(Progress::new(100, 100).percent(), 100.0);
        assert!(Progress::new(100, 100).is_complete());
        assert!(!Progress::new(101, 100).is_valid());
    }

    #[test]
    fn hazard_levels_map_to_bands() {
        assert_eq!(HazardBand::from_level(1), HazardBand::Low);
        assert_eq!(HazardBand::from_level(3), HazardBand::Low);
        assert_eq!(HazardBand::from_level(5), HazardBand::Medium);
        assert_eq!(HazardBand::from_level(7), HazardBand::High);
        assert_eq!(HazardBand::from_level(8), HazardBand::High);
        assert_eq!(HazardBand::from_level(9), HazardBand::Extreme);
    }
}
