//! Catalog Config

use std::time::Duration;

use clap::Args;

use comp_harbor_app::catalog::CatalogConfig;

/// Where cart enrichment reads products from.
#[derive(Debug, Args)]
pub struct CatalogSettings {
    /// Base URL of the product catalog; defaults to this server
    #[arg(long, env = "API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout for catalog lookups, in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS")]
    pub catalog_timeout_seconds: Option<u64>,
}

impl CatalogSettings {
    /// Resolve the base URL, falling back to the loopback address on `port`.
    #[must_use]
    pub fn base_url(&self, port: u16) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}"))
    }

    #[must_use]
    pub fn client_config(&self, port: u16) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url(port),
            timeout: self.catalog_timeout_seconds.map(Duration::from_secs),
        }
    }
}
