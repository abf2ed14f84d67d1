//! # Actions
//!
//! Everything that can happen in Vitrine becomes an `Action`.
//! The product fetch lands? That's `Action::ProductsLoaded(products)`.
//! The debouncer fires? That's `Action::QueryCommitted(text)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state in one place. No I/O here — fetch failures arrive as actions
//! already reduced to a message, and the returned [`Effect`] tells the event
//! loop what (if anything) to spawn.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::{error, info, warn};

use crate::api::Product;
use crate::core::filter::ALL_CATEGORIES;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Product fetch succeeded.
    ProductsLoaded(Vec<Product>),
    /// Product fetch failed (network or parse). The list stays empty.
    ProductsFailed(String),
    /// Category fetch succeeded with the raw labels (no sentinel).
    CategoriesLoaded(Vec<String>),
    /// Category fetch failed. Existing options are left unchanged.
    CategoriesFailed(String),
    /// The debounced search text became the committed query.
    QueryCommitted(String),
    /// The user picked a category in the selector.
    CategorySelected(String),
    /// Cycle to the next sort key.
    CycleSort,
    /// Re-issue both fetches.
    Refresh,
    Quit,
}

/// What the event loop should do after a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the product and category fetches (aborting any in flight).
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ProductsLoaded(products) => {
            info!("Product fetch complete: {} items", products.len());
            app.status_message = format!("{} products", products.len());
            app.products = products;
            app.loading_products = false;
            Effect::None
        }
        Action::ProductsFailed(message) => {
            // No user-facing retry; the list stays empty and the loading
            // flag clears so the empty state can render.
            error!("Product fetch failed: {}", message);
            app.loading_products = false;
            Effect::None
        }
        Action::CategoriesLoaded(labels) => {
            info!("Category fetch complete: {} labels", labels.len());
            let mut options = Vec::with_capacity(labels.len() + 1);
            options.push(ALL_CATEGORIES.to_string());
            options.extend(labels);
            app.category_options = options;
            app.loading_categories = false;
            Effect::None
        }
        Action::CategoriesFailed(message) => {
            // Options stay whatever they were; a log line is the only surface.
            warn!("Category fetch failed: {}", message);
            app.loading_categories = false;
            Effect::None
        }
        Action::QueryCommitted(query) => {
            app.committed_query = query;
            Effect::None
        }
        Action::CategorySelected(category) => {
            app.filters.set_selected_category(category);
            Effect::None
        }
        Action::CycleSort => {
            let next = app.filters.sort().next();
            app.filters.set_sort(next);
            app.status_message = format!("Sort: {}", next.label());
            Effect::None
        }
        Action::Refresh => {
            app.loading_products = true;
            app.loading_categories = true;
            app.status_message = String::from("Refreshing...");
            Effect::SpawnFetch
        }
        Action::Quit => Effect::Quit,
    }
}
