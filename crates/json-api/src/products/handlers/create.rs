//! Create Product Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    documents::{DocumentBody, InsertOneResponse, parse_document},
    errors::ApiError,
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Create Product Handler
///
/// Stores the body verbatim under a new identifier.
#[endpoint(tags("products"), summary = "Create Product", request_body = DocumentBody)]
#[tracing::instrument(name = "products.create", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<InsertOneResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_document(req).await?;

    let result = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %result.inserted_id, "created product");

    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use comp_harbor_app::{
        documents::DocumentError,
        domain::products::{MockProductsService, ProductsServiceError, records::ProductId},
        results::InsertOneResult,
    };

    use crate::{
        documents::tests::document, products::handlers::tests::PRODUCT_ID,
        test_helpers::products_service,
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let id: ProductId = PRODUCT_ID.parse()?;
        let payload = json!({ "product_name": "Pixel 8", "colour": "obsidian" });
        let expected = document(payload.clone());

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |product| *product == expected)
            .return_once(move |_| Ok(InsertOneResult::new(id)));

        let mut res = TestClient::post("http://example.com/products")
            .json(&payload)
            .send(&make_service(products))
            .await;

        let body: InsertOneResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            InsertOneResponse {
                acknowledged: true,
                inserted_id: PRODUCT_ID.to_string(),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_json_returns_json_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .raw_json("{not json")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!({ "error": "Invalid JSON body" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_non_object_returns_json_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .raw_json("[1,2]")
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!({ "error": "Invalid JSON body" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_with_nul_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().once().return_once(|_| {
            Err(ProductsServiceError::InvalidDocument(
                DocumentError::NulCharacter("product_name".to_string()),
            ))
        });

        let mut res = TestClient::post("http://example.com/products")
            .raw_json(r#"{"product_name":"a\u0000b"}"#)
            .send(&make_service(products))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            json!({ "error": "Document cannot contain NUL characters" })
        );

        Ok(())
    }
}
