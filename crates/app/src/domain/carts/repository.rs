//! Cart Entries Repository

use sqlx::{Postgres, Transaction, query, query_as, types::Json};

use crate::{
    documents::Document,
    domain::carts::records::{CartEntryId, CartEntryRecord},
};

const LIST_CART_ENTRIES_SQL: &str = include_str!("sql/list_cart_entries.sql");
const LIST_CART_ENTRIES_BY_USER_SQL: &str = include_str!("sql/list_cart_entries_by_user.sql");
const CREATE_CART_ENTRY_SQL: &str = include_str!("sql/create_cart_entry.sql");
const DELETE_CART_ENTRY_SQL: &str = include_str!("sql/delete_cart_entry.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartEntriesRepository;

impl PgCartEntriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CartEntryRecord>, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(LIST_CART_ENTRIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_cart_entries_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &str,
    ) -> Result<Vec<CartEntryRecord>, sqlx::Error> {
        query_as::<Postgres, CartEntryRecord>(LIST_CART_ENTRIES_BY_USER_SQL)
            .bind(user)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: CartEntryId,
        document: &Document,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_CART_ENTRY_SQL)
            .bind(entry.to_string())
            .bind(Json(document))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_cart_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: CartEntryId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ENTRY_SQL)
            .bind(entry.to_string())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
