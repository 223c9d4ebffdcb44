#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_content::CatalogManifest;
use catalog_core::{Item, ItemCategory, MajorOrder, WarEffort, Warbond};
use catalog_service::{BundledContentSource, ContentSource, Result, ServiceError};

/// Bundled data with injectable failures and call counting.
#[derive(Default)]
pub struct ScriptedSource {
    pub inner: BundledContentSource,
    pub manifest_calls: AtomicUsize,
    pub warbond_failures: AtomicUsize,
    pub fail_major_order: bool,
    pub fail_war_efforts: bool,
}

impl ScriptedSource {
    /// Fails the next `n` warbond fetches.
    pub fn failing_warbonds(n: usize) -> Self {
        Self {
            warbond_failures: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    pub fn manifest_calls(&self) -> usize {
        self.manifest_calls.load(Ordering::SeqCst)
    }
}

fn offline(what: &str) -> ServiceError {
    ServiceError::DataUnavailable {
        reason: format!("{what} offline"),
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn category(&self, category: ItemCategory) -> Result<Vec<Item>> {
        self.inner.category(category).await
    }

    async fn warbonds(&self) -> Result<Vec<Warbond>> {
        let failing = self
            .warbond_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(offline("warbonds"));
        }
        self.inner.warbonds().await
    }

    async fn major_order(&self) -> Result<MajorOrder> {
        if self.fail_major_order {
            return Err(offline("major order"));
        }
        self.inner.major_order().await
    }

    async fn war_efforts(&self) -> Result<Vec<WarEffort>> {
        if self.fail_war_efforts {
            return Err(offline("war efforts"));
        }
        self.inner.war_efforts().await
    }

    async fn manifest(&self) -> Result<CatalogManifest> {
        self.manifest_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.manifest().await
    }
}
