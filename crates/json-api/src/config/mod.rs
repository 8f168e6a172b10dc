//! Server configuration module

use clap::Parser;

use crate::config::{
    catalog::CatalogSettings,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod catalog;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Comp Harbor JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "comp-harbor-json", about = "Comp Harbor JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Document store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Product catalog settings used by cart enrichment.
    #[command(flatten)]
    pub catalog: CatalogSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
