//! Cart enrichment.
//!
//! Resolves each cart entry to the full product it references by asking the
//! catalog, one concurrent lookup per entry. A failed lookup drops that entry
//! and never fails the whole cart.

use futures::future::join_all;
use serde_json::Value;
use tracing::{error, warn};

use crate::{
    catalog::ProductCatalog, documents::Document, domain::carts::records::CartEntryRecord,
};

/// Field added to every enriched product, naming the cart entry it came from.
pub const CART_ID_FIELD: &str = "cart_id";

/// Fetch the product behind every entry concurrently and keep the successes.
///
/// Waits for every lookup to settle, so the slowest lookup bounds the call.
pub async fn enrich_entries(
    catalog: &dyn ProductCatalog,
    entries: Vec<CartEntryRecord>,
) -> Vec<Document> {
    let lookups = entries
        .into_iter()
        .map(|entry| enrich_entry(catalog, entry));

    join_all(lookups).await.into_iter().flatten().collect()
}

async fn enrich_entry(catalog: &dyn ProductCatalog, entry: CartEntryRecord) -> Option<Document> {
    let Some(product_id) = entry.product_id() else {
        warn!(cart_id = %entry.id, "cart entry has no product_id, dropping it");

        return None;
    };

    match catalog.fetch_product(product_id.to_string()).await {
        Ok(mut product) => {
            product.insert(
                CART_ID_FIELD.to_string(),
                Value::String(entry.id.to_string()),
            );

            Some(product)
        }
        Err(source) if source.is_not_found() => {
            warn!(
                cart_id = %entry.id,
                product_id,
                "cart entry references a missing product, dropping it"
            );

            None
        }
        Err(source) => {
            error!(
                cart_id = %entry.id,
                product_id,
                "error fetching product details: {source}"
            );

            None
        }
    }
}
