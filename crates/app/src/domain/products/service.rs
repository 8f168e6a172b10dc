//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    documents::{Document, ensure_storable, without_id},
    domain::products::{
        data::ProductReplacement,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::PgProductsRepository,
    },
    results::{InsertOneResult, UpdateResult},
};

/// Products service backed by the `products` table.
#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    /// Create a service over `db`.
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn create_product(
        &self,
        product: Document,
    ) -> Result<InsertOneResult<ProductRecord>, ProductsServiceError> {
        debug!(payload = ?product, "creating product");

        ensure_storable(&product)?;

        let id = ProductId::new();
        let mut tx = self.db.begin_transaction().await?;

        self.repository
            .create_product(&mut tx, id, &without_id(product))
            .await?;

        tx.commit().await?;

        Ok(InsertOneResult::new(id))
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_products_by_brand(
        &self,
        brand: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .repository
            .list_products_by_brand(&mut tx, &brand)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn replace_product(
        &self,
        product: ProductId,
        replacement: ProductReplacement,
    ) -> Result<UpdateResult<ProductRecord>, ProductsServiceError> {
        ensure_storable(replacement.fields())?;

        let mut tx = self.db.begin_transaction().await?;

        let modified = self
            .repository
            .set_product_fields(&mut tx, product, replacement.fields())
            .await?;

        let result = match modified {
            Some(modified) => UpdateResult::matched(modified),
            None => {
                // The requested identifier is not reused for the inserted document.
                let id = ProductId::new();

                self.repository
                    .create_product(&mut tx, id, replacement.fields())
                    .await?;

                UpdateResult::upserted(id)
            }
        };

        tx.commit().await?;

        Ok(result)
    }
}

#[automock]
#[async_trait]
/// Product catalogue operations.
pub trait ProductsService: Send + Sync {
    /// Stores a product document verbatim under a new identifier.
    async fn create_product(
        &self,
        product: Document,
    ) -> Result<InsertOneResult<ProductRecord>, ProductsServiceError>;

    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieves products whose `product_brand` exactly equals `brand`.
    async fn list_products_by_brand(
        &self,
        brand: String,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Overwrites the recognised fields of a product, inserting a new
    /// product when none has the given identifier.
    async fn replace_product(
        &self,
        product: ProductId,
        replacement: ProductReplacement,
    ) -> Result<UpdateResult<ProductRecord>, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::document};

    use super::*;

    fn pixel() -> Document {
        document(json!({
            "product_name": "Pixel 8",
            "product_image": "https://img.example.com/pixel.png",
            "product_brand": "Google",
            "product_type": "phone",
            "product_price": 699,
            "product_rating": 4.5,
        }))
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.products.create_product(pixel()).await?;

        let product = ctx.products.get_product(created.inserted_id).await?;

        assert!(created.acknowledged);
        assert_eq!(product.id, created.inserted_id);
        assert_eq!(product.fields, pixel());

        Ok(())
    }

    #[tokio::test]
    async fn create_product_keeps_unrecognised_fields_verbatim() -> TestResult {
        let ctx = TestContext::new().await;

        let mut payload = pixel();
        payload.insert("warranty".to_string(), json!({ "years": 2 }));

        let created = ctx.products.create_product(payload.clone()).await?;
        let product = ctx.products.get_product(created.inserted_id).await?;

        assert_eq!(product.fields, payload);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.products.get_product(ProductId::new()).await;

        assert!(
            matches!(result, Err(ProductsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_returns_all_created_products() -> TestResult {
        let ctx = TestContext::new().await;

        let a = ctx.products.create_product(pixel()).await?;
        let b = ctx
            .products
            .create_product(document(json!({ "product_name": "Walkman" })))
            .await?;

        let ids: Vec<ProductId> = ctx
            .products
            .list_products()
            .await?
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![a.inserted_id, b.inserted_id]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_by_brand_is_exact_and_case_sensitive() -> TestResult {
        let ctx = TestContext::new().await;

        let google = ctx.products.create_product(pixel()).await?;

        ctx.products
            .create_product(document(json!({ "product_brand": "google" })))
            .await?;
        ctx.products
            .create_product(document(json!({ "product_brand": "Sony" })))
            .await?;

        let products = ctx.products.list_products_by_brand("Google".to_string()).await?;

        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|p| p.id == google.inserted_id));

        Ok(())
    }

    #[tokio::test]
    async fn list_products_by_unknown_brand_is_empty() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.products.create_product(pixel()).await?;

        let products = ctx.products.list_products_by_brand("Nokia".to_string()).await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn replace_existing_product_overwrites_recognised_fields_only() -> TestResult {
        let ctx = TestContext::new().await;

        let mut original = pixel();
        original.insert("stock".to_string(), json!(12));

        let id = ctx.products.create_product(original).await?.inserted_id;

        let replacement = ProductReplacement::from_document(&document(json!({
            "product_name": "Pixel 8 Pro",
            "product_brand": "Google",
            "product_price": 999,
            "colour": "bay",
        })));

        let result = ctx.products.replace_product(id, replacement).await?;

        assert_eq!(result, UpdateResult::matched(true));

        let product = ctx.products.get_product(id).await?;

        assert_eq!(product.id, id);
        assert_eq!(product.fields.get("product_name"), Some(&json!("Pixel 8 Pro")));
        assert_eq!(product.fields.get("product_price"), Some(&json!(999)));
        assert_eq!(product.fields.get("product_image"), Some(&Value::Null));
        assert_eq!(product.fields.get("stock"), Some(&json!(12)));
        assert!(!product.fields.contains_key("colour"));

        Ok(())
    }

    #[tokio::test]
    async fn replace_with_identical_fields_reports_unmodified() -> TestResult {
        let ctx = TestContext::new().await;

        let id = ctx.products.create_product(pixel()).await?.inserted_id;

        let result = ctx
            .products
            .replace_product(id, ProductReplacement::from_document(&pixel()))
            .await?;

        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn replace_unknown_product_upserts_under_new_id() -> TestResult {
        let ctx = TestContext::new().await;
        let requested = ProductId::new();

        let result = ctx
            .products
            .replace_product(requested, ProductReplacement::from_document(&pixel()))
            .await?;

        let Some(upserted) = result.upserted_id else {
            panic!("expected an upserted id, got {result:?}");
        };

        assert_eq!(result.matched_count, 0);
        assert_eq!(result.upserted_count, 1);
        assert_ne!(upserted, requested);

        let product = ctx.products.get_product(upserted).await?;

        assert_eq!(product.fields, pixel());

        assert!(matches!(
            ctx.products.get_product(requested).await,
            Err(ProductsServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_nul_is_rejected_before_storage() -> TestResult {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(document(json!({ "product_name": "a\u{0}b" })))
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidDocument(_))),
            "expected InvalidDocument, got {result:?}"
        );
        assert!(ctx.products.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn replace_with_nul_leaves_product_untouched() -> TestResult {
        let ctx = TestContext::new().await;

        let id = ctx.products.create_product(pixel()).await?.inserted_id;

        let result = ctx
            .products
            .replace_product(
                id,
                ProductReplacement::from_document(&document(json!({
                    "product_name": "Pixel\u{0}",
                }))),
            )
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidDocument(_))),
            "expected InvalidDocument, got {result:?}"
        );
        assert_eq!(ctx.products.get_product(id).await?.fields, pixel());

        Ok(())
    }
}
