//! HTTP client for reading products back from the catalog API.
//!
//! Cart enrichment goes through this client rather than the products
//! repository, so the catalog may be served by a separate process.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::documents::Document;

/// Configuration for reaching the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog, e.g. `"http://localhost:5000"`.
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Errors that can occur when reading from the catalog.
#[derive(Debug, Error)]
pub enum CatalogClientError {
    /// The configured base URL could not be parsed or cannot carry a path.
    #[error("invalid catalog base url: {0}")]
    InvalidBaseUrl(String),

    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status.
    #[error("catalog responded with status {0}")]
    UnexpectedStatus(StatusCode),
}

impl CatalogClientError {
    /// Whether the catalog reported that the product does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnexpectedStatus(StatusCode::NOT_FOUND))
    }
}

/// Source of full product documents for cart enrichment.
#[automock]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch a single product document by its identifier.
    async fn fetch_product(&self, product_id: String) -> Result<Document, CatalogClientError>;
}

/// HTTP client for `GET /product/{id}` on the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: Url,
    http: Client,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is not an absolute `http(s)` URL
    /// or the HTTP client cannot be built.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CatalogClientError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() {
            return Err(CatalogClientError::InvalidBaseUrl(config.base_url));
        }

        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    fn product_url(&self, product_id: &str) -> Result<Url, CatalogClientError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| CatalogClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("product")
            .push(product_id);

        Ok(url)
    }
}

#[async_trait]
impl ProductCatalog for CatalogClient {
    async fn fetch_product(&self, product_id: String) -> Result<Document, CatalogClientError> {
        let url = self.product_url(&product_id)?;

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json::<Document>().await?)
    }
}
