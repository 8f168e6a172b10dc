//! Replace Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use comp_harbor_app::domain::products::{data::ProductReplacement, records::ProductId};

use crate::{
    documents::{DocumentBody, UpdateResponse, parse_document},
    errors::ApiError,
    extensions::*,
    products::errors::{INVALID_PRODUCT_ID, into_api_error},
    state::State,
};

/// Replace Product Handler
///
/// Overwrites the recognised product fields, writing `null` for omitted
/// ones. When nothing matches, the fields are inserted under a new
/// identifier reported as `upsertedId`.
#[endpoint(tags("products"), summary = "Replace Product", request_body = DocumentBody)]
#[tracing::instrument(
    name = "products.replace",
    skip(id, req, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<UpdateResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let id: ProductId = id
        .into_inner()
        .parse()
        .map_err(|_invalid| ApiError::bad_request(INVALID_PRODUCT_ID))?;

    tracing::Span::current().record("product_id", tracing::field::display(id));

    let replacement = ProductReplacement::from_document(&parse_document(req).await?);

    let result = state
        .app
        .products
        .replace_product(id, replacement)
        .await
        .map_err(into_api_error)?;

    tracing::info!(
        matched = result.matched_count,
        modified = result.modified_count,
        upserted = result.upserted_count,
        "replaced product"
    );

    Ok(Json(result.into()))
}
