//! User Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::errors::into_api_error,
    documents::DocumentBody,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// User Cart Handler
///
/// Returns the products in a user's cart, each carrying the `cart_id` of
/// the entry it came from. Entries whose product cannot be fetched are left
/// out.
#[endpoint(tags("carts"), summary = "Get User Cart")]
#[tracing::instrument(name = "carts.products", skip(user_id, depot), err)]
pub(crate) async fn handler(
    user_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<DocumentBody>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .carts
        .list_cart_products(user_id.into_inner())
        .await
        .map_err(into_api_error)?;

    tracing::debug!(count = products.len(), "enriched cart");

    Ok(Json(
        products
            .into_iter()
            .map(|fields| DocumentBody { fields })
            .collect(),
    ))
}
