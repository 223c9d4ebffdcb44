//! Command execution against the catalog service.
use std::sync::Arc;

use anyhow::{Result, bail};
use catalog_core::CatalogQuery;
use catalog_service::{
    CatalogStore, ContentSource, Dashboard, LookupService, Resource, WarEffortSort,
};
use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::cli::Command;
use crate::render;

type Source = Arc<dyn ContentSource>;

pub struct App {
    source: Source,
    store: Arc<CatalogStore<Source>>,
    lookup: LookupService<Source>,
    json: bool,
}

impl App {
    pub fn new(source: Source, json: bool) -> Self {
        let store = Arc::new(CatalogStore::new(Arc::clone(&source)));
        Self {
            lookup: LookupService::new(Arc::clone(&store)),
            store,
            source,
            json,
        }
    }

    /// Runs one command and returns what should be printed.
    pub async fn execute(&self, command: Command) -> Result<String> {
        debug!(?command, json = self.json, "executing command");
        match command {
            Command::Armor(args) => self.list(args.into_query()).await,
            Command::Weapons(args) => self.list(args.into_query()).await,
            Command::Strategems(args) => self.list(args.into_query()).await,
            Command::Boosters(args) => self.list(args.into_query()).await,
            Command::Warbonds => {
                let warbonds = self.store.load_warbonds().await?;
                if self.json {
                    return Ok(serde_json::to_string_pretty(&warbonds)?);
                }
                Ok(render::warbond_list(&warbonds))
            }
            Command::Item { id } => {
                let Some(detail) = self.lookup.item_detail(&id).await? else {
                    bail!("No item with id `{id}`");
                };
                if self.json {
                    return Ok(serde_json::to_string_pretty(&detail)?);
                }
                Ok(render::item_detail(&detail))
            }
            Command::Warbond { id, page } => self.warbond(&id, page).await,
            Command::War { sort } => self.war(sort).await,
            Command::Home => {
                let dashboard = self.dashboard().await?;
                if self.json {
                    return Ok(serde_json::to_string_pretty(&json!({
                        "major_order": dashboard.major_order,
                        "total_helldivers": dashboard.total_helldivers(),
                        "top_planets": dashboard.top_planets(3),
                    }))?);
                }
                Ok(render::home(&dashboard, Utc::now()))
            }
        }
    }

    async fn list(&self, query: CatalogQuery) -> Result<String> {
        let items = self.store.search(&query).await?;
        if self.json {
            return Ok(serde_json::to_string_pretty(&items)?);
        }
        Ok(render::item_list(query.category(), &items))
    }

    async fn warbond(&self, id: &str, only_page: Option<u32>) -> Result<String> {
        let Some(warbond) = self.lookup.find_warbond_by_id(id).await? else {
            bail!("No warbond with id `{id}`");
        };

        let mut pages = Vec::new();
        for page in &warbond.pages {
            if only_page.is_some_and(|wanted| wanted != page.page_number) {
                continue;
            }
            let items = self
                .lookup
                .page_items(id, page.page_number)
                .await?
                .unwrap_or_default();
            pages.push((page, items));
        }
        if let Some(wanted) = only_page
            && pages.is_empty()
        {
            bail!("Warbond `{id}` has no page {wanted}");
        }

        if self.json {
            let pages: Vec<_> = pages
                .iter()
                .map(|(page, items)| json!({ "page": page, "items": items }))
                .collect();
            return Ok(serde_json::to_string_pretty(&json!({
                "warbond": warbond,
                "pages": pages,
            }))?);
        }
        Ok(render::warbond_detail(&warbond, &pages))
    }

    async fn war(&self, sort: WarEffortSort) -> Result<String> {
        let efforts = self.dashboard().await?.sorted(sort);
        if self.json {
            return Ok(serde_json::to_string_pretty(&efforts)?);
        }
        Ok(render::war_efforts(&efforts))
    }

    async fn dashboard(&self) -> Result<Dashboard> {
        let mut view = Resource::new();
        view.settle(Dashboard::load(&self.source)).await;
        match view.into_result() {
            Some(result) => Ok(result?),
            None => bail!("war dashboard did not finish loading"),
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog_service::BundledContentSource;
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    async fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("warbond").chain(args.iter().copied()))?;
        App::new(Arc::new(BundledContentSource::new()), cli.json)
            .execute(cli.command)
            .await
    }

    #[tokio::test]
    async fn lists_filtered_armor() {
        let out = run(&["armor", "--class", "heavy"]).await.unwrap();
        assert!(out.contains("Heavy Assault Armor"));
        assert!(!out.contains("Light Armor"));
    }

    #[tokio::test]
    async fn json_output_is_machine_readable() {
        let out = run(&["weapons", "--min-damage", "100", "--json"]).await.unwrap();
        let items: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(items.as_array().map(Vec::len), Some(1));
        assert_eq!(items[0]["id"], "weapon_2");
    }

    #[tokio::test]
    async fn item_detail_names_its_warbond() {
        let out = run(&["item", "booster_1"]).await.unwrap();
        assert!(out.contains("Stamina Enhancement"));
        assert!(out.contains("Helldivers Mobilize"));
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        assert!(run(&["item", "nonexistent"]).await.is_err());
        assert!(run(&["warbond", "nonexistent"]).await.is_err());
        assert!(run(&["warbond", "helldivers_mobilize", "--page", "4"]).await.is_err());
    }

    #[tokio::test]
    async fn warbond_detail_lists_page_items() {
        let out = run(&["warbond", "steeled_veterans"]).await.unwrap();
        assert!(out.contains("Veteran Gear"));
        assert!(out.contains("SG-8 Punisher"));
    }

    #[tokio::test]
    async fn home_shows_major_order_and_totals() {
        let out = run(&["home"]).await.unwrap();
        assert!(out.contains("Liberate Veld"));
        assert!(out.contains("43220"));
    }
}
