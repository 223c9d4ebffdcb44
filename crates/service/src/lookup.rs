//! Id-based reads over the catalog store.
use std::sync::Arc;

use catalog_core::{Item, Warbond, WarbondPage};
use serde::Serialize;

use crate::error::Result;
use crate::source::ContentSource;
use crate::store::CatalogStore;

/// An item joined with the warbond page that sells it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemDetail {
    pub item: Item,
    pub warbond: Warbond,
    pub page: WarbondPage,
}

/// Read-only id lookups. A missing id is `Ok(None)`, never an error.
pub struct LookupService<S> {
    store: Arc<CatalogStore<S>>,
}

impl<S> Clone for LookupService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ContentSource> LookupService<S> {
    pub fn new(store: Arc<CatalogStore<S>>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Finds an item in any category, checking categories in lookup order.
    pub async fn find_item_by_id(&self, id: &str) -> Result<Option<Item>> {
        let snapshot = self.store.snapshot().await?;
        Ok(snapshot.item(id).cloned())
    }

    pub async fn find_warbond_by_id(&self, id: &str) -> Result<Option<Warbond>> {
        let snapshot = self.store.snapshot().await?;
        Ok(snapshot.warbond(id).cloned())
    }

    /// Joins an item with its warbond and page.
    pub async fn item_detail(&self, id: &str) -> Result<Option<ItemDetail>> {
        let snapshot = self.store.snapshot().await?;
        let Some(item) = snapshot.item(id) else {
            return Ok(None);
        };
        // Validated snapshots always resolve both.
        let Some(warbond) = snapshot.warbond(item.warbond_id.as_str()) else {
            return Ok(None);
        };
        let Some(page) = warbond.page(item.warbond_page) else {
            return Ok(None);
        };

        Ok(Some(ItemDetail {
            item: item.clone(),
            page: page.clone(),
            warbond: warbond.clone(),
        }))
    }

    /// Resolves one warbond page to its items, in page order.
    ///
    /// `None` when the warbond or page does not exist.
    pub async fn page_items(
        &self,
        warbond_id: &str,
        page_number: u32,
    ) -> Result<Option<Vec<Item>>> {
        let snapshot = self.store.snapshot().await?;
        let Some(page) = snapshot
            .warbond(warbond_id)
            .and_then(|warbond| warbond.page(page_number))
        else {
            return Ok(None);
        };

        Ok(Some(
            page.items
                .iter()
                .filter_map(|id| snapshot.item(id.as_str()))
                .cloned()
                .collect(),
        ))
    }
}
