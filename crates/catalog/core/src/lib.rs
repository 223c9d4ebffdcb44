//! Catalog data types and the query layer shared by every front-end.
//!
//! `catalog-core` defines the immutable records of the equipment catalog
//! (items, warbonds) and the galactic war (campaigns, major order), the
//! invariants a loaded dataset must satisfy, and the pure filter engine used to
//! answer list queries. It performs no I/O; loading lives in `catalog-content`
//! and asynchronous access in `catalog-service`.
pub mod filter;
pub mod ids;
pub mod item;
pub mod validate;
pub mod war;
pub mod warbond;

pub use filter::{
    ArmorFilters, BoosterFilters, CatalogQuery, CommonFilters, Criteria, NumericRange,
    StrategemFilters, TextScope, TextSearch, WeaponFilters, parse_bound,
};
pub use ids::{ItemId, WarbondId};
pub use item::{
    ArmorClass, ArmorData, ArmorTrait, ArmorTraitKind, BoosterData, BoosterEffect,
    BoosterEffectKind, Cost, DamageType, Item, ItemCategory, ItemKind, Penetration,
    Resistances, StrategemClass, StrategemData, StrategemEffect, WeaponClass, WeaponData,
    WeaponTrait, WeaponTraitKind,
};
pub use validate::{ValidationError, validate_catalog, validate_major_order, validate_war_efforts};
pub use war::{
    HazardBand, MajorOrder, Objective, ObjectiveKind, Planet, PlanetRef, Progress, Reward,
    RewardKind, WarEffort, WarStatus,
};
pub use warbond::{Warbond, WarbondPage};
