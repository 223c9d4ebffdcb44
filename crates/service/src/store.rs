//! Memoized, validated catalog snapshot.
//!
//! The first access fetches the manifest, the four item categories, and the
//! warbonds concurrently, validates them as a whole, and fills each warbond
//! page with the ids of the items that point at it. A successful snapshot is
//! kept for the lifetime of the store; a failed one is not, so the next call
//! fetches again.
use std::collections::HashMap;
use std::sync::Arc;

use catalog_content::CatalogManifest;
use catalog_core::filter;
use catalog_core::{CatalogQuery, Item, ItemCategory, ItemId, Warbond, WarbondId, validate_catalog};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{Result, ServiceError};
use crate::source::ContentSource;

/// Immutable view of the whole catalog at one manifest version.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    manifest: CatalogManifest,
    armor: Vec<Item>,
    weapons: Vec<Item>,
    strategems: Vec<Item>,
    boosters: Vec<Item>,
    warbonds: Vec<Warbond>,
    items_by_id: HashMap<ItemId, (ItemCategory, usize)>,
    warbonds_by_id: HashMap<WarbondId, usize>,
}

impl CatalogSnapshot {
    /// Builds a snapshot from raw collections.
    ///
    /// Each collection must hold only items of its own category. Warbond page
    /// item lists are replaced by the items' back-references.
    pub fn build(
        manifest: CatalogManifest,
        collections: [Vec<Item>; 4],
        mut warbonds: Vec<Warbond>,
    ) -> Result<Self> {
        for (category, items) in ItemCategory::ALL.iter().zip(&collections) {
            if let Some(stray) = items.iter().find(|item| item.category() != *category) {
                return Err(ServiceError::DataUnavailable {
                    reason: format!(
                        "source returned {} `{}` among {}",
                        stray.category(),
                        stray.id,
                        category.plural()
                    ),
                });
            }
        }

        validate_catalog(collections.iter().flatten(), &warbonds)?;
        populate_pages(&mut warbonds, collections.iter().flatten());

        let mut items_by_id = HashMap::new();
        for (category, items) in ItemCategory::ALL.iter().zip(&collections) {
            for (position, item) in items.iter().enumerate() {
                items_by_id.insert(item.id.clone(), (*category, position));
            }
        }
        let warbonds_by_id = warbonds
            .iter()
            .enumerate()
            .map(|(position, warbond)| (warbond.id.clone(), position))
            .collect();

        let [armor, weapons, strategems, boosters] = collections;
        Ok(Self {
            manifest,
            armor,
            weapons,
            strategems,
            boosters,
            warbonds,
            items_by_id,
            warbonds_by_id,
        })
    }

    pub fn manifest(&self) -> &CatalogManifest {
        &self.manifest
    }

    pub fn version(&self) -> u32 {
        self.manifest.version
    }

    /// Items of one category, in dataset order.
    pub fn items(&self, category: ItemCategory) -> &[Item] {
        match category {
            ItemCategory::Armor => &self.armor,
            ItemCategory::Weapon => &self.weapons,
            ItemCategory::Strategem => &self.strategems,
            ItemCategory::Booster => &self.boosters,
        }
    }

    pub fn warbonds(&self) -> &[Warbond] {
        &self.warbonds
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        let (category, position) = self.items_by_id.get(id)?;
        self.items(*category).get(*position)
    }

    pub fn warbond(&self, id: &str) -> Option<&Warbond> {
        self.warbonds.get(*self.warbonds_by_id.get(id)?)
    }

    pub fn len(&self) -> usize {
        self.items_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_by_id.is_empty()
    }

    /// Items of `query`'s category matching it, in dataset order.
    pub fn search(&self, query: &CatalogQuery) -> Vec<Item> {
        filter::apply(self.items(query.category()), query)
    }
}

fn populate_pages<'a>(warbonds: &mut [Warbond], items: impl Iterator<Item = &'a Item>) {
    let mut pages: HashMap<(WarbondId, u32), Vec<ItemId>> = HashMap::new();
    for item in items {
        pages
            .entry((item.warbond_id.clone(), item.warbond_page))
            .or_default()
            .push(item.id.clone());
    }

    for warbond in warbonds.iter_mut() {
        for page in &mut warbond.pages {
            page.items = pages
                .remove(&(warbond.id.clone(), page.page_number))
                .unwrap_or_default();
        }
    }
}

/// Loads the catalog from a [`ContentSource`] once and answers queries from it.
pub struct CatalogStore<S> {
    source: S,
    snapshot: OnceCell<Arc<CatalogSnapshot>>,
}

impl<S: ContentSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// True once a snapshot has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.initialized()
    }

    /// Returns the snapshot, populating it on first use.
    pub async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        self.snapshot
            .get_or_try_init(|| self.populate())
            .await
            .cloned()
    }

    /// Every item of `category`, in dataset order.
    pub async fn load(&self, category: ItemCategory) -> Result<Vec<Item>> {
        Ok(self.snapshot().await?.items(category).to_vec())
    }

    /// Every warbond with populated pages, in dataset order.
    pub async fn load_warbonds(&self) -> Result<Vec<Warbond>> {
        Ok(self.snapshot().await?.warbonds().to_vec())
    }

    /// Loads `query`'s category and filters it.
    pub async fn search(&self, query: &CatalogQuery) -> Result<Vec<Item>> {
        let snapshot = self.snapshot().await?;
        let results = snapshot.search(query);
        debug!(
            category = %query.category(),
            total = snapshot.items(query.category()).len(),
            matched = results.len(),
            "catalog search"
        );
        Ok(results)
    }

    async fn populate(&self) -> Result<Arc<CatalogSnapshot>> {
        let source = &self.source;
        let fetched = tokio::try_join!(
            source.manifest(),
            source.category(ItemCategory::Armor),
            source.category(ItemCategory::Weapon),
            source.category(ItemCategory::Strategem),
            source.category(ItemCategory::Booster),
            source.warbonds(),
        );

        let (manifest, armor, weapons, strategems, boosters, warbonds) = match fetched {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "failed to fetch catalog");
                return Err(err);
            }
        };

        let snapshot =
            CatalogSnapshot::build(manifest, [armor, weapons, strategems, boosters], warbonds)
                .inspect_err(|err| warn!(error = %err, "rejected catalog data"))?;

        info!(
            name = %snapshot.manifest().name,
            version = snapshot.version(),
            items = snapshot.len(),
            warbonds = snapshot.warbonds().len(),
            "catalog snapshot loaded"
        );
        Ok(Arc::new(snapshot))
    }
}
