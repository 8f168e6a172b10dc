//! Brands Repository

use sqlx::{Postgres, query, query_as, types::Json};

use crate::{
    database::Db,
    documents::Document,
    domain::brands::records::{BrandId, BrandRecord},
};

const LIST_BRANDS_SQL: &str = include_str!("sql/list_brands.sql");
const CREATE_BRAND_SQL: &str = include_str!("sql/create_brand.sql");

/// PostgreSQL-backed brands repository.
#[derive(Debug, Clone)]
pub(crate) struct PgBrandsRepository {
    db: Db,
}

impl PgBrandsRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }

    pub(crate) async fn list_brands(&self) -> Result<Vec<BrandRecord>, sqlx::Error> {
        query_as::<Postgres, BrandRecord>(LIST_BRANDS_SQL)
            .fetch_all(self.db.pool())
            .await
    }

    pub(crate) async fn create_brand(
        &self,
        brand: BrandId,
        document: &Document,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_BRAND_SQL)
            .bind(brand.to_string())
            .bind(Json(document))
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}
