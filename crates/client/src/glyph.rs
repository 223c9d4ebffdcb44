//! Terminal symbols for catalog and war concepts.
use std::fmt;

use catalog_core::{HazardBand, ItemCategory, RewardKind, WarStatus};
use console::{Style, StyledObject};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Armor,
    Weapon,
    Strategem,
    Booster,
    Warbond,
    Locked,
    Unlocked,
    Medal,
    Requisition,
    Samples,
    Planet,
    Helldivers,
    MajorOrder,
    Objective,
    Expiry,
    Active,
    Completed,
    Defeated,
    HazardLow,
    HazardMedium,
    HazardHigh,
    HazardExtreme,
}

impl Glyph {
    pub const fn symbol(self) -> &'static str {
        match self {
            Glyph::Armor => "⛨",
            Glyph::Weapon => "⌖",
            Glyph::Strategem => "✦",
            Glyph::Booster => "⚡",
            Glyph::Warbond => "◆",
            Glyph::Locked => "🔒",
            Glyph::Unlocked => "✓",
            Glyph::Medal => "★",
            Glyph::Requisition => "¤",
            Glyph::Samples => "◈",
            Glyph::Planet => "◉",
            Glyph::Helldivers => "☻",
            Glyph::MajorOrder => "⚑",
            Glyph::Objective => "▸",
            Glyph::Expiry => "⏱",
            Glyph::Active => "●",
            Glyph::Completed => "✔",
            Glyph::Defeated => "✘",
            Glyph::HazardLow => "▁",
            Glyph::HazardMedium => "▃",
            Glyph::HazardHigh => "▅",
            Glyph::HazardExtreme => "▇",
        }
    }

    pub const fn category(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Armor => Glyph::Armor,
            ItemCategory::Weapon => Glyph::Weapon,
            ItemCategory::Strategem => Glyph::Strategem,
            ItemCategory::Booster => Glyph::Booster,
        }
    }

    pub const fn lock(unlocked: bool) -> Self {
        if unlocked { Glyph::Unlocked } else { Glyph::Locked }
    }

    pub const fn status(status: WarStatus) -> Self {
        match status {
            WarStatus::Active => Glyph::Active,
            WarStatus::Completed => Glyph::Completed,
            WarStatus::Defeated => Glyph::Defeated,
        }
    }

    pub const fn hazard(band: HazardBand) -> Self {
        match band {
            HazardBand::Low => Glyph::HazardLow,
            HazardBand::Medium => Glyph::HazardMedium,
            HazardBand::High => Glyph::HazardHigh,
            HazardBand::Extreme => Glyph::HazardExtreme,
        }
    }

    pub const fn reward(kind: RewardKind) -> Self {
        match kind {
            RewardKind::Medals => Glyph::Medal,
            RewardKind::Requisition => Glyph::Requisition,
            RewardKind::Samples => Glyph::Samples,
        }
    }

    pub fn style(self) -> Style {
        let style = Style::new();
        match self {
            Glyph::HazardLow | Glyph::Unlocked | Glyph::Completed => style.green(),
            Glyph::HazardMedium | Glyph::Medal | Glyph::MajorOrder => style.yellow(),
            Glyph::HazardHigh => style.color256(208),
            Glyph::HazardExtreme | Glyph::Defeated | Glyph::Locked => style.red(),
            Glyph::Active | Glyph::Planet => style.cyan(),
            _ => style,
        }
    }

    pub fn styled(self) -> StyledObject<&'static str> {
        self.style().apply_to(self.symbol())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.styled())
    }
}
