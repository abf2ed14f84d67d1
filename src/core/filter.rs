//! Filter state and the filter/sort pipeline.
//!
//! The rendered product sequence is always `apply(products, query, category,
//! sort)` — a pure function of those four inputs with no hidden state.
//! Re-deriving it from the same inputs yields the same sequence, so the
//! event loop can recompute freely whenever any input changes.

use crate::api::Product;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Ordering applied after filtering. `None` preserves the fetched order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Cycle to the next sort key (wraps back to `None`).
    pub fn next(self) -> Self {
        match self {
            SortKey::None => SortKey::PriceAsc,
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::NameAsc,
            SortKey::NameAsc => SortKey::NameDesc,
            SortKey::NameDesc => SortKey::None,
        }
    }

    /// Short label for the status bar.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "price ↑",
            SortKey::PriceDesc => "price ↓",
            SortKey::NameAsc => "name ↑",
            SortKey::NameDesc => "name ↓",
        }
    }
}

/// The user's current filter selections.
///
/// Fields are private; the UI mutates them only through the setters, so every
/// change flows through one place. `search_query` here is the *raw* text —
/// the debounced committed query lives on `App`.
#[derive(Clone, Debug)]
pub struct FilterState {
    search_query: String,
    selected_category: String,
    sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            sort: SortKey::None,
        }
    }
}

impl FilterState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn set_selected_category(&mut self, category: String) {
        self.selected_category = category;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }
}

/// Produce the exact sequence of products to render.
///
/// Applied in this fixed order (sort is stable only relative to the
/// already-filtered subset):
///
/// 1. Category filter: exact, case-sensitive match; [`ALL_CATEGORIES`] is a
///    no-op.
/// 2. Text filter: case-insensitive substring match of `query` against the
///    title; an empty query passes everything through.
/// 3. Stable sort by `sort`; prices compare numerically, names by
///    case-folded title.
///
/// The input slice is never mutated — the fetched order is preserved for
/// subsequent re-filters. No matches is not an error; the presentation layer
/// renders an explicit empty state.
pub fn apply(products: &[Product], query: &str, category: &str, sort: SortKey) -> Vec<Product> {
    let needle = query.to_lowercase();

    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortKey::None => {}
        SortKey::PriceAsc => out.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => out.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::NameAsc => out.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        SortKey::NameDesc => {
            out.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
    }

    out
}
