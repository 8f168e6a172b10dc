//! Request and response bodies shared by every collection.

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use tracing::warn;

use comp_harbor_app::{
    documents::Document,
    domain::{brands::records::BrandRecord, carts::records::CartEntryRecord, products::records::ProductRecord},
    results::{DeleteResult, InsertOneResult, UpdateResult},
};

use crate::errors::{ApiError, INVALID_JSON_BODY};

/// Any JSON object. Stored verbatim, apart from a caller-supplied `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct DocumentBody {
    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub fields: Document,
}

/// Read the request body as a JSON object.
///
/// Malformed JSON, a non-object body and a missing JSON content type all
/// become a 400 carrying the usual error body.
pub(crate) async fn parse_document(req: &mut Request) -> Result<Document, ApiError> {
    req.parse_json::<DocumentBody>()
        .await
        .map(|body| body.fields)
        .map_err(|source| {
            warn!("rejected request body: {source}");

            ApiError::bad_request(INVALID_JSON_BODY)
        })
}

/// A stored document with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DocumentResponse {
    /// Store-assigned identifier, 24 lowercase hex characters
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub fields: Document,
}

impl From<BrandRecord> for DocumentResponse {
    fn from(brand: BrandRecord) -> Self {
        Self {
            id: brand.id.to_string(),
            fields: brand.fields,
        }
    }
}

impl From<ProductRecord> for DocumentResponse {
    fn from(product: ProductRecord) -> Self {
        Self {
            id: product.id.to_string(),
            fields: product.fields,
        }
    }
}

impl From<CartEntryRecord> for DocumentResponse {
    fn from(entry: CartEntryRecord) -> Self {
        Self {
            id: entry.id.to_string(),
            fields: entry.fields,
        }
    }
}

/// Acknowledgement of a single insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InsertOneResponse {
    pub acknowledged: bool,

    /// Identifier of the new document
    pub inserted_id: String,
}

impl<T> From<InsertOneResult<T>> for InsertOneResponse {
    fn from(result: InsertOneResult<T>) -> Self {
        Self {
            acknowledged: result.acknowledged,
            inserted_id: result.inserted_id.to_string(),
        }
    }
}

/// Acknowledgement of an update or upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,

    /// Identifier of the inserted document when nothing matched
    pub upserted_id: Option<String>,
}

impl<T> From<UpdateResult<T>> for UpdateResponse {
    fn from(result: UpdateResult<T>) -> Self {
        Self {
            acknowledged: result.acknowledged,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: result.upserted_count,
            upserted_id: result.upserted_id.map(|id| id.to_string()),
        }
    }
}

/// Acknowledgement of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        Self {
            acknowledged: result.acknowledged,
            deleted_count: result.deleted_count,
        }
    }
}
