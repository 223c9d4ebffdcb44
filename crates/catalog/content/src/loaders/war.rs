//! War effort and major order loaders.

use catalog_core::{MajorOrder, PlanetRef, Progress, Reward, WarEffort};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron};

/// War effort list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarEffortCatalog {
    pub efforts: Vec<WarEffort>,
}

/// Loader for active campaigns from RON files.
pub struct WarEffortLoader;

impl WarEffortLoader {
    pub fn parse(content: &str) -> LoadResult<Vec<WarEffort>> {
        let catalog: WarEffortCatalog = parse_ron(content, "war effort")?;
        Ok(catalog.efforts)
    }
}

/// Major order as stored on disk.
///
/// The expiry is relative so a static dataset never goes stale; it is pinned
/// to an absolute instant by [`MajorOrderSpec::into_order`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorOrderSpec {
    pub id: String,
    pub title: String,
    pub description: String,
    pub briefing: String,
    pub progress: Progress,
    pub reward: Reward,
    pub expires_in_hours: u32,
    #[serde(default)]
    pub planet: Option<PlanetRef>,
}

impl MajorOrderSpec {
    pub fn into_order(self, now: DateTime<Utc>) -> MajorOrder {
        MajorOrder {
            id: self.id,
            title: self.title,
            description: self.description,
            briefing: self.briefing,
            progress: self.progress,
            reward: self.reward,
            expires_at: now + Duration::hours(i64::from(self.expires_in_hours)),
            planet: self.planet,
        }
    }
}

/// Loader for the current major order from RON files.
pub struct MajorOrderLoader;

impl MajorOrderLoader {
    /// Parse the major order, anchoring its expiry at `now`.
    pub fn parse(content: &str, now: DateTime<Utc>) -> LoadResult<MajorOrder> {
        let spec: MajorOrderSpec = parse_ron(content, "major order")?;
        Ok(spec.into_order(now))
    }
}
