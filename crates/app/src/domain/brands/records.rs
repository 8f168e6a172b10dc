//! Brand Records

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, postgres::PgRow};

use crate::{
    documents::{Document, try_get_document, try_get_id},
    ids::TypedId,
};

/// Brand ID
pub type BrandId = TypedId<BrandRecord>;

/// Brand Record
///
/// Brands carry no fixed schema; whatever was imported is served back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: BrandId,

    /// Everything else, as supplied
    #[serde(flatten)]
    pub fields: Document,
}

impl<'r> FromRow<'r, PgRow> for BrandRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: try_get_id(row)?,
            fields: try_get_document(row)?,
        })
    }
}
