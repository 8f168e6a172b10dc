//! Cart Errors

use tracing::{error, warn};

use comp_harbor_app::domain::carts::CartsServiceError;

use crate::errors::{ApiError, INVALID_DOCUMENT};

pub(crate) const INVALID_CART_ID: &str = "Invalid cart ID";

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::InvalidDocument(source) => {
            warn!("rejected cart entry: {source}");

            ApiError::bad_request(INVALID_DOCUMENT)
        }
        CartsServiceError::Sql(source) => {
            error!("cart store error: {source}");

            ApiError::internal()
        }
    }
}
