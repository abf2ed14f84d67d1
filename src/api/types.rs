//! Wire types for the catalog endpoints.
//!
//! `GET /products` returns an array of [`Product`] objects and
//! `GET /products/categories` returns a plain array of strings. Products are
//! immutable once fetched; the app never writes them back.

use serde::{Deserialize, Serialize};

/// A single catalog item as served by the API.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: u64,
    pub title: String,
    /// Non-negative price in the store currency.
    pub price: f64,
    /// Free-form category label, matched exactly by the category filter.
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Image URI. Rendered lazily: only rows that have been scrolled into
    /// view show their full content.
    #[serde(default)]
    pub image: String,
    /// Some catalog entries ship without a rating.
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Average rating and vote count.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}
