//! # Application State
//!
//! Core business state for Vitrine. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── products: Vec<Product>        // raw catalog, fetched order
//! ├── category_options: Vec<String> // ["All", ...fetched labels]
//! ├── filters: FilterState          // search text, category, sort
//! ├── committed_query: String       // debounced, trimmed search text
//! ├── latch: VisibilityLatch        // rows seen at least once
//! ├── loading_products: bool        // product fetch in flight
//! ├── loading_categories: bool      // category fetch in flight
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::Product;
use crate::core::filter::{self, ALL_CATEGORIES, FilterState};
use crate::core::visibility::VisibilityLatch;

pub struct App {
    /// Raw product list in the order the API returned it. Never reordered;
    /// the pipeline works on a copy so re-filters always start from here.
    pub products: Vec<Product>,
    /// Category selector options, always starting with the `"All"` sentinel.
    pub category_options: Vec<String>,
    pub filters: FilterState,
    /// The debounced, trimmed search text actually used for filtering.
    pub committed_query: String,
    pub latch: VisibilityLatch,
    pub loading_products: bool,
    pub loading_categories: bool,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            category_options: vec![ALL_CATEGORIES.to_string()],
            filters: FilterState::default(),
            committed_query: String::new(),
            latch: VisibilityLatch::new(),
            // Both fetches are issued at mount, before the first frame.
            loading_products: true,
            loading_categories: true,
            status_message: String::from("Loading products..."),
        }
    }

    /// The sequence of products to render, derived from (raw products,
    /// committed query, selected category, sort). Pure and side-effect-free;
    /// callers recompute whenever any of the four inputs changes.
    pub fn visible_products(&self) -> Vec<Product> {
        filter::apply(
            &self.products,
            &self.committed_query,
            self.filters.selected_category(),
            self.filters.sort(),
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::SortKey;
    use crate::test_support::sample_products;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.products.is_empty());
        assert_eq!(app.category_options, vec!["All"]);
        assert!(app.loading_products);
        assert!(app.loading_categories);
        assert!(app.committed_query.is_empty());
    }

    #[test]
    fn test_visible_products_tracks_filter_inputs() {
        let mut app = App::new();
        app.products = sample_products();

        assert_eq!(app.visible_products().len(), 2);

        app.filters.set_selected_category("Shoes".to_string());
        let out = app.visible_products();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Red Shoe");

        app.filters.set_selected_category("All".to_string());
        app.filters.set_sort(SortKey::PriceAsc);
        let out = app.visible_products();
        assert_eq!(out[0].title, "Blue Hat");
    }
}
