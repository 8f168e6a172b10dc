//! List Cart Entries Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::errors::into_api_error, documents::DocumentResponse, errors::ApiError, extensions::*,
    state::State,
};

/// List Cart Entries Handler
///
/// Returns every cart entry of every user, unenriched.
#[endpoint(tags("carts"), summary = "List Cart Entries")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entries = state
        .app
        .carts
        .list_cart_entries()
        .await
        .map_err(into_api_error)?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
