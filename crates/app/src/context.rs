//! App Context

use std::sync::Arc;

use sqlx::{migrate::MigrateError, postgres::PgConnectOptions};
use thiserror::Error;
use tracing::info;

use crate::{
    catalog::{CatalogClient, CatalogClientError, CatalogConfig, ProductCatalog},
    database::{self, Db},
    domain::{
        brands::{BrandsService, PgBrandsService},
        carts::{CartsService, PgCartsService},
        products::{PgProductsService, ProductsService},
    },
};

/// Failures while bringing up the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The store could not be reached.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// The schema could not be brought up to date.
    #[error("failed to apply migrations")]
    Migrate(#[source] MigrateError),

    /// The catalog client could not be built.
    #[error("failed to build catalog client")]
    Catalog(#[source] CatalogClientError),
}

/// The services every entry point works through.
#[derive(Clone)]
pub struct AppContext {
    /// Brand catalogue
    pub brands: Arc<dyn BrandsService>,

    /// Product catalogue
    pub products: Arc<dyn ProductsService>,

    /// Cart entries and enrichment
    pub carts: Arc<dyn CartsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Wire the store-backed services over `db`.
    #[must_use]
    pub fn new(db: &Db, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            brands: Arc::new(PgBrandsService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone(), catalog)),
        }
    }

    /// Connect to the store, bring its schema up to date and build the
    /// catalog client. The returned [`Db`] is kept by the caller so the pool
    /// can be closed on shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unreachable, a migration fails or
    /// the catalog base URL is unusable.
    pub async fn connect(
        options: PgConnectOptions,
        catalog: CatalogConfig,
    ) -> Result<(Self, Db), AppInitError> {
        let db = database::connect_with(options)
            .await
            .map_err(AppInitError::Database)?;

        db.migrate().await.map_err(AppInitError::Migrate)?;
        db.ping().await.map_err(AppInitError::Database)?;

        info!("connected to document store");

        let catalog = CatalogClient::new(catalog).map_err(AppInitError::Catalog)?;

        Ok((Self::new(&db, Arc::new(catalog)), db))
    }
}
