//! Brands service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    documents::{Document, ensure_storable, without_id},
    domain::brands::{
        errors::BrandsServiceError,
        records::{BrandId, BrandRecord},
        repository::PgBrandsRepository,
    },
    results::InsertOneResult,
};

/// Brands service backed by the `brands` table.
#[derive(Debug, Clone)]
pub struct PgBrandsService {
    repository: PgBrandsRepository,
}

impl PgBrandsService {
    /// Create a service over `db`.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            repository: PgBrandsRepository::new(db),
        }
    }
}

#[async_trait]
impl BrandsService for PgBrandsService {
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError> {
        self.repository.list_brands().await.map_err(Into::into)
    }

    async fn create_brand(
        &self,
        brand: Document,
    ) -> Result<InsertOneResult<BrandRecord>, BrandsServiceError> {
        ensure_storable(&brand)?;

        let id = BrandId::new();

        self.repository.create_brand(id, &without_id(brand)).await?;

        Ok(InsertOneResult::new(id))
    }
}

#[automock]
#[async_trait]
/// Brand catalogue operations.
pub trait BrandsService: Send + Sync {
    /// Retrieves every brand in store order.
    async fn list_brands(&self) -> Result<Vec<BrandRecord>, BrandsServiceError>;

    /// Stores a brand document verbatim. Only reachable from the admin CLI.
    async fn create_brand(
        &self,
        brand: Document,
    ) -> Result<InsertOneResult<BrandRecord>, BrandsServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::document};

    use super::*;

    #[tokio::test]
    async fn list_brands_empty_when_none_created() -> TestResult {
        let ctx = TestContext::new().await;

        let brands = ctx.brands.list_brands().await?;

        assert!(brands.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_brands_returns_created_brands_in_insertion_order() -> TestResult {
        let ctx = TestContext::new().await;

        let apple = ctx
            .brands
            .create_brand(document(json!({ "brand_name": "Apple" })))
            .await?;

        let sony = ctx
            .brands
            .create_brand(document(json!({ "brand_name": "Sony", "brand_image": "sony.png" })))
            .await?;

        let brands = ctx.brands.list_brands().await?;

        let ids: Vec<BrandId> = brands.iter().map(|b| b.id).collect();

        assert_eq!(ids, vec![apple.inserted_id, sony.inserted_id]);
        assert_eq!(
            brands.last().and_then(|b| b.fields.get("brand_image")),
            Some(&json!("sony.png"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_brand_ignores_caller_supplied_id() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx
            .brands
            .create_brand(document(json!({ "_id": "mine", "brand_name": "Dell" })))
            .await?;

        let brands = ctx.brands.list_brands().await?;

        assert_eq!(brands.len(), 1);
        assert!(brands.iter().all(|b| b.id == created.inserted_id));
        assert!(brands.iter().all(|b| !b.fields.contains_key("_id")));

        Ok(())
    }
}
