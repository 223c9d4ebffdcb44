//! War overview: the major order joined with active campaigns.
use std::cmp::Reverse;

use catalog_core::{MajorOrder, WarEffort, validate_major_order, validate_war_efforts};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::source::ContentSource;

/// Orderings offered for the campaign list. All sort descending.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WarEffortSort {
    #[default]
    Helldivers,
    Progress,
    Hazard,
}

/// Sorts campaigns in place, descending by `by`. Ties keep their order.
pub fn sort_war_efforts(efforts: &mut [WarEffort], by: WarEffortSort) {
    match by {
        WarEffortSort::Helldivers => efforts.sort_by_key(|effort| Reverse(effort.helldiver_count)),
        WarEffortSort::Progress => {
            efforts.sort_by(|a, b| b.progress.percent().total_cmp(&a.progress.percent()))
        }
        WarEffortSort::Hazard => efforts.sort_by_key(|effort| Reverse(effort.planet.hazard_level)),
    }
}

pub fn total_helldivers(efforts: &[WarEffort]) -> u64 {
    efforts.iter().map(|effort| effort.helldiver_count).sum()
}

/// Mean campaign completion in percent. No campaigns averages to 0.
pub fn average_progress(efforts: &[WarEffort]) -> f64 {
    if efforts.is_empty() {
        return 0.0;
    }
    let sum: f64 = efforts.iter().map(|effort| effort.progress.percent()).sum();
    sum / efforts.len() as f64
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub major_order: MajorOrder,
    pub war_efforts: Vec<WarEffort>,
}

impl Dashboard {
    /// Fetches the major order and the campaigns concurrently.
    ///
    /// Fails if either fetch fails or either fails validation.
    pub async fn load<S: ContentSource + ?Sized>(source: &S) -> Result<Self> {
        let (major_order, war_efforts) =
            tokio::try_join!(source.major_order(), source.war_efforts())?;

        validate_major_order(&major_order)?;
        validate_war_efforts(&war_efforts)?;

        info!(
            major_order = %major_order.id,
            campaigns = war_efforts.len(),
            "war dashboard loaded"
        );
        Ok(Self {
            major_order,
            war_efforts,
        })
    }

    pub fn total_helldivers(&self) -> u64 {
        total_helldivers(&self.war_efforts)
    }

    pub fn average_progress(&self) -> f64 {
        average_progress(&self.war_efforts)
    }

    /// The `n` most populated campaigns.
    pub fn top_planets(&self, n: usize) -> Vec<&WarEffort> {
        let mut efforts: Vec<&WarEffort> = self.war_efforts.iter().collect();
        efforts.sort_by_key(|effort| Reverse(effort.helldiver_count));
        efforts.truncate(n);
        efforts
    }

    /// Campaigns in the requested order.
    pub fn sorted(&self, by: WarEffortSort) -> Vec<WarEffort> {
        let mut efforts = self.war_efforts.clone();
        sort_war_efforts(&mut efforts, by);
        efforts
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::{Planet, Progress, WarStatus};

    use super::*;

    fn effort(id: &str, current: u64, max: u64) -> WarEffort {
        WarEffort {
            id: id.to_owned(),
            planet: Planet {
                id: id.to_owned(),
                name: id.to_owned(),
                biome: "desert".to_owned(),
                hazard_level: 5,
            },
            helldiver_count: 1000,
            progress: Progress::new(current, max),
            status: WarStatus::Active,
            objectives: Vec::new(),
        }
    }

    #[test]
    fn average_progress_of_no_campaigns_is_zero() {
        assert_eq!(average_progress(&[]), 0.0);
        assert_eq!(total_helldivers(&[]), 0);
    }

    #[test]
    fn average_progress_is_the_mean_percent() {
        let efforts = [effort("a", 1, 4), effort("b", 3, 4), effort("c", 1, 2)];
        assert_eq!(average_progress(&efforts), 50.0);
        assert_eq!(total_helldivers(&efforts), 3000);
    }
}
