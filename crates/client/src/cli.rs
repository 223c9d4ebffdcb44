//! Command-line surface of the `warbond` binary.
//!
//! Numeric bounds are taken as raw text and normalized: a blank or malformed
//! bound means "no constraint" rather than an argument error.
use std::str::FromStr;

use catalog_core::{
    ArmorClass, ArmorFilters, BoosterFilters, CatalogQuery, CommonFilters, DamageType,
    NumericRange, Penetration, StrategemClass, StrategemFilters, WeaponClass, WeaponFilters,
    parse_bound,
};
use catalog_service::WarEffortSort;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

/// Browse the equipment catalog and the galactic war
#[derive(Parser, Debug)]
#[command(name = "warbond")]
#[command(about = "Browse the equipment catalog and the galactic war", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List armor
    Armor(ArmorArgs),

    /// List weapons
    Weapons(WeaponArgs),

    /// List strategems
    Strategems(StrategemArgs),

    /// List boosters
    Boosters(CommonArgs),

    /// List warbonds
    Warbonds,

    /// Show one item with its warbond page
    Item { id: String },

    /// Show one warbond with the items on each page
    Warbond {
        id: String,

        /// Show only this page
        #[arg(long)]
        page: Option<u32>,
    },

    /// List active campaigns
    War {
        /// Order campaigns by helldivers, progress, or hazard
        #[arg(long, default_value_t = WarEffortSort::default())]
        sort: WarEffortSort,
    },

    /// Major order and war overview
    Home,
}

#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Case-insensitive text to search for
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only items from this warbond
    #[arg(long)]
    pub warbond: Option<String>,

    /// Only unlocked (true) or only locked (false) items
    #[arg(long)]
    pub unlocked: Option<bool>,
}

impl CommonArgs {
    pub fn filters(&self) -> CommonFilters {
        CommonFilters {
            search_term: self.search.trim().to_string(),
            category: None,
            warbond_id: self.warbond.as_deref().map(Into::into),
            unlocked: self.unlocked,
        }
    }

    pub fn into_query(self) -> CatalogQuery {
        BoosterFilters {
            common: self.filters(),
        }
        .into()
    }
}

#[derive(Args, Debug, Default)]
pub struct ArmorArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long)]
    pub class: Option<ArmorClass>,

    /// Trait id or trait kind; repeat or comma-separate to match any of them
    #[arg(long = "trait", value_delimiter = ',')]
    pub traits: Vec<String>,

    #[arg(long, default_value = "")]
    pub min_rating: String,

    #[arg(long, default_value = "")]
    pub max_rating: String,
}

impl ArmorArgs {
    pub fn into_query(self) -> CatalogQuery {
        ArmorFilters {
            common: self.common.filters(),
            class: self.class,
            traits: self.traits,
            armor_rating: range("rating", &self.min_rating, &self.max_rating),
        }
        .into()
    }
}

#[derive(Args, Debug, Default)]
pub struct WeaponArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long)]
    pub class: Option<WeaponClass>,

    /// Damage types to include; repeat or comma-separate
    #[arg(long = "damage-type", value_delimiter = ',')]
    pub damage_types: Vec<DamageType>,

    /// Penetration tiers to include; repeat or comma-separate
    #[arg(long, value_delimiter = ',')]
    pub penetration: Vec<Penetration>,

    #[arg(long, default_value = "")]
    pub min_damage: String,

    #[arg(long, default_value = "")]
    pub max_damage: String,
}

impl WeaponArgs {
    pub fn into_query(self) -> CatalogQuery {
        WeaponFilters {
            common: self.common.filters(),
            class: self.class,
            damage_types: self.damage_types,
            penetration: self.penetration,
            damage: range("damage", &self.min_damage, &self.max_damage),
        }
        .into()
    }
}

#[derive(Args, Debug, Default)]
pub struct StrategemArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[arg(long)]
    pub class: Option<StrategemClass>,
}

impl StrategemArgs {
    pub fn into_query(self) -> CatalogQuery {
        StrategemFilters {
            common: self.common.filters(),
            class: self.class,
        }
        .into()
    }
}

fn range<T>(field: &str, min: &str, max: &str) -> NumericRange<T>
where
    T: FromStr + PartialOrd + Copy,
{
    NumericRange::new(bound(field, "min", min), bound(field, "max", max))
}

fn bound<T: FromStr>(field: &str, side: &str, raw: &str) -> Option<T> {
    let parsed = parse_bound(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        warn!(field, side, input = raw, "ignoring malformed numeric bound");
    }
    parsed
}
