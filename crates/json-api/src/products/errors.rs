//! Product Errors

use tracing::{error, warn};

use comp_harbor_app::domain::products::ProductsServiceError;

use crate::errors::{ApiError, INVALID_DOCUMENT};

pub(crate) const INVALID_PRODUCT_ID: &str = "Invalid product ID";
pub(crate) const PRODUCT_NOT_FOUND: &str = "Product not found";

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found(PRODUCT_NOT_FOUND),
        ProductsServiceError::InvalidDocument(source) => {
            warn!("rejected product: {source}");

            ApiError::bad_request(INVALID_DOCUMENT)
        }
        ProductsServiceError::Sql(source) => {
            error!("product store error: {source}");

            ApiError::internal()
        }
    }
}
