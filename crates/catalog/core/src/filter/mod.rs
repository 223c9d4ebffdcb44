//! Predicate-based filtering over item collections.
//!
//! A criteria value is a conjunction of optional constraints: every *active*
//! field must hold for an item to match, and an unset field constrains nothing.
//! Multi-select fields match when the item's value is any of the selected ones.
//!
//! Filtering never reorders: the result is always a subsequence of the input.
//!
//! ```
//! use catalog_core::filter::{self, ArmorFilters};
//! use catalog_core::{ArmorClass, Item};
//!
//! let heavy_only = ArmorFilters {
//!     class: Some(ArmorClass::Heavy),
//!     ..ArmorFilters::default()
//! };
//! let items: Vec<Item> = Vec::new();
//! assert!(filter::apply(&items, &heavy_only).is_empty());
//! ```

mod query;

use std::str::FromStr;

use crate::item::Item;

pub use query::{
    ArmorFilters, BoosterFilters, CatalogQuery, CommonFilters, StrategemFilters, TextScope,
    WeaponFilters,
};

/// A predicate over catalog items.
pub trait Criteria {
    fn matches(&self, item: &Item) -> bool;
}

impl<C: Criteria + ?Sized> Criteria for &C {
    fn matches(&self, item: &Item) -> bool {
        (**self).matches(item)
    }
}

/// Returns the items matching `criteria`, preserving input order.
pub fn apply<C: Criteria + ?Sized>(items: &[Item], criteria: &C) -> Vec<Item> {
    matching(items, criteria).cloned().collect()
}

/// Borrowing variant of [`apply`].
pub fn matching<'a, C: Criteria + ?Sized>(
    items: &'a [Item],
    criteria: &'a C,
) -> impl Iterator<Item = &'a Item> + 'a {
    items.iter().filter(move |item| criteria.matches(item))
}

/// Case-insensitive substring needle. An empty term matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }
}

/// Inclusive numeric bounds. A missing bound imposes no constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumericRange<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for NumericRange<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: PartialOrd + Copy> NumericRange<T> {
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub const fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: T) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

impl<T: PartialOrd + Copy + FromStr> NumericRange<T> {
    /// Builds a range from raw user input; malformed bounds become unbounded.
    pub fn parse(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }
}

/// Parses a numeric filter bound, mapping blank or malformed input to `None`.
pub fn parse_bound<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_search_is_case_insensitive() {
        let search = TextSearch::new("LIBER");
        assert!(search.matches("AR-23 Liberator"));
        assert!(!search.matches("SG-8 Punisher"));
        assert!(TextSearch::new("").matches("anything"));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = NumericRange::new(Some(25u8), Some(75u8));
        assert!(range.contains(25));
        assert!(range.contains(75));
        assert!(!range.contains(24));
        assert!(!range.contains(76));
        assert!(NumericRange::<u8>::default().contains(0));
    }

    #[test]
    fn malformed_bounds_become_unconstrained() {
        assert_eq!(parse_bound::<u32>("abc"), None);
        assert_eq!(parse_bound::<u32>(""), None);
        assert_eq!(parse_bound::<u32>("  "), None);
        assert_eq!(parse_bound::<u32>("-5"), None);
        assert_eq!(parse_bound::<u8>("300"), None);
        assert_eq!(parse_bound::<u32>(" 50 "), Some(50));

        let range = NumericRange::<u8>::parse("fifty", "80");
        assert_eq!(range, NumericRange::at_most(80));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = NumericRange::new(Some(80u32), Some(20u32));
        assert!((0..200).all(|value| !range.contains(value)));
    }
}
