//! HTTP client for the product catalog.
//!
//! The [`CatalogSource`] trait is the seam between the UI and the network:
//! the event loop spawns fetches against `Arc<dyn CatalogSource>`, and tests
//! swap in a stub. [`CatalogClient`] is the reqwest-backed implementation.

use std::fmt;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::types::Product;

/// Errors that can occur while talking to the catalog API.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// API returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the response body. Not retryable.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A source of catalog data. The two fetches are independent; callers may
/// issue them concurrently and must not rely on completion order.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product list, in the server's order.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch the distinct category labels, in the server's order.
    /// The `"All"` sentinel is NOT part of the payload; the state layer
    /// prepends it.
    async fn fetch_categories(&self) -> Result<Vec<String>, ApiError>;
}

/// Catalog client over a REST endpoint (e.g. a Fake Store style API).
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            // Trailing slashes would double up when joining paths.
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    ///
    /// The body is read as text first so that decode failures surface as
    /// [`ApiError::Parse`] rather than being folded into the transport error.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/products/categories").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = CatalogClient::new("http://localhost:9000/".to_string());
        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
        assert_eq!(
            ApiError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
