//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    catalog::{MockProductCatalog, ProductCatalog},
    database::Db,
    domain::{brands::PgBrandsService, carts::PgCartsService, products::PgProductsService},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub brands: PgBrandsService,
    pub products: PgProductsService,
    pub carts: PgCartsService,
}

impl TestContext {
    /// Services over a fresh database. The catalog refuses every lookup, so
    /// tests that enrich carts should use [`TestContext::with_catalog`].
    pub async fn new() -> Self {
        let mut catalog = MockProductCatalog::new();

        catalog.expect_fetch_product().never();

        Self::with_catalog(Arc::new(catalog)).await
    }

    pub async fn with_catalog(catalog: Arc<dyn ProductCatalog>) -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            brands: PgBrandsService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db, catalog),
            db: test_db,
        }
    }
}
