//! List Products By Brand Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    documents::DocumentResponse, errors::ApiError, extensions::*,
    products::errors::into_api_error, state::State,
};

/// List Products By Brand Handler
///
/// Returns the products whose `product_brand` equals `brand` exactly.
/// Unknown brands yield an empty array.
#[endpoint(tags("products"), summary = "List Products By Brand")]
pub(crate) async fn handler(
    brand: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products_by_brand(brand.into_inner())
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
