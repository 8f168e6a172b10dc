//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use comp_harbor_app::domain::products::records::ProductId;

use crate::{
    documents::DocumentResponse,
    errors::ApiError,
    extensions::*,
    products::errors::{INVALID_PRODUCT_ID, into_api_error},
    state::State,
};

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DocumentResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id: ProductId = id
        .into_inner()
        .parse()
        .map_err(|_invalid| ApiError::bad_request(INVALID_PRODUCT_ID))?;

    let product = state
        .app
        .products
        .get_product(id)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
