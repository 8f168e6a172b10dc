//! Cart Records

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, postgres::PgRow};

use crate::{
    documents::{Document, try_get_document, try_get_id},
    ids::TypedId,
};

/// Cart Entry ID
pub type CartEntryId = TypedId<CartEntryRecord>;

/// Cart Entry Record
///
/// One product placed in one user's cart. Only `user_id` and `product_id`
/// are read by the service; every other field is stored as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntryRecord {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: CartEntryId,

    /// Everything else, as supplied
    #[serde(flatten)]
    pub fields: Document,
}

impl CartEntryRecord {
    /// The owning user, when the entry names one as a string.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.fields.get("user_id").and_then(Value::as_str)
    }

    /// The referenced product, when the entry names one as a string.
    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.fields.get("product_id").and_then(Value::as_str)
    }
}

impl<'r> FromRow<'r, PgRow> for CartEntryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: try_get_id(row)?,
            fields: try_get_document(row)?,
        })
    }
}
