//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    documents::DocumentResponse, errors::ApiError, extensions::*,
    products::errors::into_api_error, state::State,
};

/// List Products Handler
///
/// Returns every product in store order.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use comp_harbor_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::{products::handlers::tests::make_product, test_helpers::products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_list_products_returns_200() -> TestResult {
        let a = make_product(ProductId::new(), "Google");
        let b = make_product(ProductId::new(), "Apple");
        let expected = vec![
            DocumentResponse::from(a.clone()),
            DocumentResponse::from(b.clone()),
        ];

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move || Ok(vec![a, b]));

        products.expect_list_products_by_brand().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        let body: Vec<DocumentResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_store_failure_returns_500() {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
