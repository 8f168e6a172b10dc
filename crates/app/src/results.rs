//! Store Acknowledgements
//!
//! Every write answers with one of these, serialised in camelCase.

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Result of inserting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct InsertOneResult<T> {
    /// Always `true` once the store has accepted the write.
    pub acknowledged: bool,

    /// Identifier assigned to the new document.
    pub inserted_id: TypedId<T>,
}

impl<T> InsertOneResult<T> {
    /// Acknowledge an insert under `inserted_id`.
    #[must_use]
    pub fn new(inserted_id: TypedId<T>) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of an update, possibly upserting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct UpdateResult<T> {
    /// Always `true` once the store has accepted the write.
    pub acknowledged: bool,

    /// Documents matching the filter, 0 or 1.
    pub matched_count: u64,

    /// Matched documents whose content actually changed.
    pub modified_count: u64,

    /// 1 when nothing matched and a document was inserted.
    pub upserted_count: u64,

    /// Identifier of the inserted document, if any.
    pub upserted_id: Option<TypedId<T>>,
}

impl<T> UpdateResult<T> {
    /// An update that matched one existing document.
    #[must_use]
    pub fn matched(modified: bool) -> Self {
        Self {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
            upserted_count: 0,
            upserted_id: None,
        }
    }

    /// An update that matched nothing and inserted a new document instead.
    #[must_use]
    pub fn upserted(id: TypedId<T>) -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id),
        }
    }
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Always `true` once the store has accepted the write.
    pub acknowledged: bool,

    /// Documents removed, 0 or 1.
    pub deleted_count: u64,
}

impl DeleteResult {
    /// Acknowledge a delete that removed `deleted_count` documents.
    #[must_use]
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    struct Widget;

    #[test]
    fn update_result_serialises_like_the_store_driver() -> TestResult {
        let id: TypedId<Widget> = "65a1f0c2b3d4e5f607182930".parse()?;

        assert_eq!(
            serde_json::to_value(UpdateResult::upserted(id))?,
            json!({
                "acknowledged": true,
                "matchedCount": 0,
                "modifiedCount": 0,
                "upsertedCount": 1,
                "upsertedId": "65a1f0c2b3d4e5f607182930",
            })
        );

        assert_eq!(
            serde_json::to_value(UpdateResult::<Widget>::matched(false))?,
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 0,
                "upsertedCount": 0,
                "upsertedId": null,
            })
        );

        Ok(())
    }

    #[test]
    fn delete_result_reports_count() -> TestResult {
        assert_eq!(
            serde_json::to_value(DeleteResult::new(0))?,
            json!({ "acknowledged": true, "deletedCount": 0 })
        );

        Ok(())
    }
}
