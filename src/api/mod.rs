//! # Catalog API
//!
//! Types and HTTP client for the remote product catalog. The rest of the
//! application talks to the catalog through the [`CatalogSource`] trait so
//! tests can substitute a stub without a network.

pub mod client;
pub mod types;

pub use client::{ApiError, CatalogClient, CatalogSource};
pub use types::{Product, Rating};
