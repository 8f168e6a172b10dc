//! Products Data

use serde_json::Value;

use crate::documents::Document;

/// Fields a replacement always writes, as `null` when the caller omits them.
pub const REPLACED_FIELDS: [&str; 6] = [
    "product_name",
    "product_image",
    "product_brand",
    "product_type",
    "product_price",
    "product_rating",
];

/// Written only when the caller supplies it.
pub const DESCRIPTION_FIELD: &str = "product_description";

/// The recognised subset of a replacement payload.
///
/// Anything outside [`REPLACED_FIELDS`] and [`DESCRIPTION_FIELD`] is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReplacement {
    fields: Document,
}

impl ProductReplacement {
    /// Project `document` onto the recognised product fields.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        let mut fields: Document = REPLACED_FIELDS
            .iter()
            .map(|&field| {
                (
                    field.to_string(),
                    document.get(field).cloned().unwrap_or(Value::Null),
                )
            })
            .collect();

        if let Some(description) = document.get(DESCRIPTION_FIELD) {
            fields.insert(DESCRIPTION_FIELD.to_string(), description.clone());
        }

        Self { fields }
    }

    /// The fields to write.
    #[must_use]
    pub fn fields(&self) -> &Document {
        &self.fields
    }
}
