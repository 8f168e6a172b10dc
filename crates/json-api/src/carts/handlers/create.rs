//! Add Cart Entry Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_api_error,
    documents::{DocumentBody, InsertOneResponse, parse_document},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Add Cart Entry Handler
///
/// Stores the body verbatim as a cart entry.
#[endpoint(tags("carts"), summary = "Add Cart Entry", request_body = DocumentBody)]
#[tracing::instrument(name = "carts.create", skip(req, depot), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<InsertOneResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let entry = parse_document(req).await?;

    let result = state
        .app
        .carts
        .create_cart_entry(entry)
        .await
        .map_err(into_api_error)?;

    tracing::info!(cart_id = %result.inserted_id, "added cart entry");

    Ok(Json(result.into()))
}
