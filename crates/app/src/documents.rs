//! Schemaless documents as stored in each collection.

use serde_json::{Map, Value};
use sqlx::{Row, postgres::PgRow, types::Json};
use thiserror::Error;

use crate::ids::TypedId;

/// Field name carrying a document's identifier when rendered.
pub const ID_FIELD: &str = "_id";

/// A caller-supplied JSON object.
pub type Document = Map<String, Value>;

/// A document the store cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// PostgreSQL `jsonb` rejects U+0000 in both keys and strings.
    #[error("document contains a NUL character at `{0}`")]
    NulCharacter(String),
}

/// Check that every key and string in `document` can be stored.
///
/// # Errors
///
/// Returns [`DocumentError::NulCharacter`] naming the first offending path.
pub fn ensure_storable(document: &Document) -> Result<(), DocumentError> {
    check_object(document, "")
}

fn check_object(object: &Document, path: &str) -> Result<(), DocumentError> {
    for (key, value) in object {
        let path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };

        if key.contains('\0') {
            return Err(DocumentError::NulCharacter(path));
        }

        check_value(value, &path)?;
    }

    Ok(())
}

fn check_value(value: &Value, path: &str) -> Result<(), DocumentError> {
    match value {
        Value::String(text) if text.contains('\0') => {
            Err(DocumentError::NulCharacter(path.to_string()))
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(index, item)| check_value(item, &format!("{path}[{index}]"))),
        Value::Object(object) => check_object(object, path),
        _ => Ok(()),
    }
}

/// Drop any caller-supplied identifier so the store can assign its own.
#[must_use]
pub fn without_id(mut document: Document) -> Document {
    document.remove(ID_FIELD);

    document
}

pub(crate) fn try_get_id<T>(row: &PgRow) -> Result<TypedId<T>, sqlx::Error> {
    let id: String = row.try_get("id")?;

    id.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "id".to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn try_get_document(row: &PgRow) -> Result<Document, sqlx::Error> {
    row.try_get::<Json<Document>, _>("document")
        .map(|Json(document)| document)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::test::helpers::document;

    use super::*;

    #[test]
    fn ensure_storable_accepts_ordinary_documents() {
        let product = document(json!({
            "product_name": "Pixel 8",
            "tags": ["phone", { "colour": "obsidian" }],
            "product_price": 699,
        }));

        assert_eq!(ensure_storable(&product), Ok(()));
    }

    #[test]
    fn ensure_storable_rejects_nul_in_strings() {
        let product = document(json!({ "product_name": "a\u{0}b" }));

        assert_eq!(
            ensure_storable(&product),
            Err(DocumentError::NulCharacter("product_name".to_string()))
        );
    }

    #[test]
    fn ensure_storable_reports_nested_paths() {
        let entry = document(json!({
            "user_id": "u1",
            "options": { "sizes": ["s", "m\u{0}"] },
        }));

        assert_eq!(
            ensure_storable(&entry),
            Err(DocumentError::NulCharacter("options.sizes[1]".to_string()))
        );
    }

    #[test]
    fn ensure_storable_rejects_nul_in_keys() {
        let entry = document(json!({ "user\u{0}id": "u1" }));

        assert!(matches!(
            ensure_storable(&entry),
            Err(DocumentError::NulCharacter(_))
        ));
    }

    #[test]
    fn without_id_removes_only_the_identifier() {
        let Value::Object(document) = json!({ "_id": "x", "user_id": "u1" }) else {
            unreachable!("literal is an object");
        };

        let stripped = without_id(document);

        assert_eq!(Value::Object(stripped), json!({ "user_id": "u1" }));
    }
}
