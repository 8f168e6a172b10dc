//! Product Records

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, postgres::PgRow};

use crate::{
    documents::{Document, try_get_document, try_get_id},
    ids::TypedId,
};

/// Product ID
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Everything else, as supplied
    #[serde(flatten)]
    pub fields: Document,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: try_get_id(row)?,
            fields: try_get_document(row)?,
        })
    }
}
