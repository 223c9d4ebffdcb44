//! Warbond progression tracks.
use crate::ids::{ItemId, WarbondId};

/// A themed progression track of purchasable pages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warbond {
    pub id: WarbondId,
    pub name: String,
    pub description: String,
    /// Medals needed to complete every page.
    pub total_medals: u32,
    pub unlocked: bool,
    /// Sorted ascending by `page_number`.
    pub pages: Vec<WarbondPage>,
}

impl Warbond {
    pub fn page(&self, page_number: u32) -> Option<&WarbondPage> {
        self.pages.iter().find(|page| page.page_number == page_number)
    }

    /// Item ids across all pages, in page order.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }
}

/// One page of a warbond.
///
/// `items` lists the ids of items whose `warbond_page` points here. Data files
/// may leave it empty; the catalog store fills it from the items themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarbondPage {
    /// 1-based.
    pub page_number: u32,
    pub name: String,
    pub required_medals: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemId>,
}
