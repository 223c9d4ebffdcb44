//! Source backed by the sample dataset compiled into the binary.
use std::time::Duration;

use async_trait::async_trait;
use catalog_content::{CatalogManifest, ContentFactory};
use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};
use chrono::Utc;
use tracing::debug;

use super::ContentSource;
use crate::error::{Result, ServiceError};

/// Serves the bundled dataset, optionally after a simulated network delay.
#[derive(Clone, Debug)]
pub struct BundledContentSource {
    factory: ContentFactory,
    latency: Duration,
}

impl BundledContentSource {
    pub fn new() -> Self {
        Self {
            factory: ContentFactory::bundled(),
            latency: Duration::ZERO,
        }
    }

    /// Delay every request by `latency` before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn respond(&self, what: &str) {
        debug!(what, latency_ms = self.latency.as_millis() as u64, "serving bundled content");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for BundledContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for BundledContentSource {
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>> {
        self.respond(category.plural()).await;
        self.factory
            .load_items(category)
            .map_err(ServiceError::unavailable)
    }

    async fn warbonds(&self) -> Result<Vec<Warbond>> {
        self.respond("warbonds").await;
        self.factory.load_warbonds().map_err(ServiceError::unavailable)
    }

    async fn major_order(&self) -> Result<MajorOrder> {
        self.respond("major order").await;
        self.factory
            .load_major_order(Utc::now())
            .map_err(ServiceError::unavailable)
    }

    async fn war_efforts(&self) -> Result<Vec<WarEffort>> {
        self.respond("war efforts").await;
        self.factory
            .load_war_efforts()
            .map_err(ServiceError::unavailable)
    }

    async fn manifest(&self) -> Result<CatalogManifest> {
        self.respond("manifest").await;
        self.factory.load_manifest().map_err(ServiceError::unavailable)
    }
}
