//! Per-request timeout around another source.
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use catalog_content::CatalogManifest;
use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};
use tracing::warn;

use super::ContentSource;
use crate::error::{Result, ServiceError};

/// Fails any request to `inner` that takes longer than `timeout`.
#[derive(Clone, Debug)]
pub struct TimeoutContentSource<S> {
    inner: S,
    timeout: Duration,
}

impl<S: ContentSource> TimeoutContentSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn guard<T>(&self, what: &str, request: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!(what, timeout_ms, "content request timed out");
                Err(ServiceError::DataUnavailable {
                    reason: format!("content request timed out after {:?}", self.timeout),
                })
            }
        }
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for TimeoutContentSource<S> {
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>> {
        self.guard(category.plural(), self.inner.category(category)).await
    }

    async fn warbonds(&self) -> Result<Vec<Warbond>> {
        self.guard("warbonds", self.inner.warbonds()).await
    }

    async fn major_order(&self) -> Result<MajorOrder> {
        self.guard("major order", self.inner.major_order()).await
    }

    async fn war_efforts(&self) -> Result<Vec<WarEffort>> {
        self.guard("war efforts", self.inner.war_efforts()).await
    }

    async fn manifest(&self) -> Result<CatalogManifest> {
        self.guard("manifest", self.inner.manifest()).await
    }
}
