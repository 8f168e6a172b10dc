//! Products Repository

use sqlx::{Postgres, Transaction, query, query_as, query_scalar, types::Json};

use crate::{
    documents::Document,
    domain::products::records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_PRODUCTS_BY_BRAND_SQL: &str = include_str!("sql/list_products_by_brand.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const SET_PRODUCT_FIELDS_SQL: &str = include_str!("sql/set_product_fields.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_products_by_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &str,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_BY_BRAND_SQL)
            .bind(brand)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.to_string())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        document: &Document,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_PRODUCT_SQL)
            .bind(product.to_string())
            .bind(Json(document))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Merge `fields` over the stored document.
    ///
    /// Returns `None` when no document has the identifier, otherwise whether
    /// the stored document changed.
    pub(crate) async fn set_product_fields(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        fields: &Document,
    ) -> Result<Option<bool>, sqlx::Error> {
        query_scalar::<Postgres, bool>(SET_PRODUCT_FIELDS_SQL)
            .bind(product.to_string())
            .bind(Json(fields))
            .fetch_optional(&mut **tx)
            .await
    }
}
