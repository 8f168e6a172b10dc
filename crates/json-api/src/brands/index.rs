//! List Brands Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{documents::DocumentResponse, errors::ApiError, extensions::*, state::State};

/// List Brands Handler
///
/// Returns every brand in store order.
#[endpoint(tags("brands"), summary = "List Brands")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DocumentResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let brands = state
        .app
        .brands
        .list_brands()
        .await
        .or_500("failed to list brands")?;

    Ok(Json(brands.into_iter().map(Into::into).collect()))
}
