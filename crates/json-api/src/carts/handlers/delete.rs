//! Remove Cart Entry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use comp_harbor_app::domain::carts::records::CartEntryId;

use crate::{
    carts::errors::{INVALID_CART_ID, into_api_error},
    documents::DeleteResponse,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Remove Cart Entry Handler
///
/// Deleting an unknown entry succeeds with `deletedCount` 0.
#[endpoint(tags("carts"), summary = "Remove Cart Entry")]
#[tracing::instrument(
    name = "carts.delete",
    skip(id, depot),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id: CartEntryId = id
        .into_inner()
        .parse()
        .map_err(|_invalid| ApiError::bad_request(INVALID_CART_ID))?;

    tracing::Span::current().record("cart_id", tracing::field::display(id));

    let result = state
        .app
        .carts
        .delete_cart_entry(id)
        .await
        .map_err(into_api_error)?;

    tracing::info!(deleted = result.deleted_count, "removed cart entry");

    Ok(Json(result.into()))
}
