//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    catalog::ProductCatalog,
    database::Db,
    documents::{Document, ensure_storable, without_id},
    domain::carts::{
        enrichment::enrich_entries,
        errors::CartsServiceError,
        records::{CartEntryId, CartEntryRecord},
        repository::PgCartEntriesRepository,
    },
    results::{DeleteResult, InsertOneResult},
};

/// Carts service backed by the `carts` table, enriching through `catalog`.
#[derive(Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartEntriesRepository,
    catalog: Arc<dyn ProductCatalog>,
}

impl PgCartsService {
    /// Create a service over `db` that resolves products through `catalog`.
    #[must_use]
    pub fn new(db: Db, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            db,
            repository: PgCartEntriesRepository::new(),
            catalog,
        }
    }
}

impl fmt::Debug for PgCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgCartsService")
            .field("db", &self.db)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn create_cart_entry(
        &self,
        entry: Document,
    ) -> Result<InsertOneResult<CartEntryRecord>, CartsServiceError> {
        debug!(payload = ?entry, "adding cart entry");

        ensure_storable(&entry)?;

        let id = CartEntryId::new();
        let mut tx = self.db.begin_transaction().await?;

        self.repository
            .create_cart_entry(&mut tx, id, &without_id(entry))
            .await?;

        tx.commit().await?;

        Ok(InsertOneResult::new(id))
    }

    async fn list_cart_entries(&self) -> Result<Vec<CartEntryRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let entries = self.repository.list_cart_entries(&mut tx).await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn list_cart_entries_by_user(
        &self,
        user: String,
    ) -> Result<Vec<CartEntryRecord>, CartsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let entries = self
            .repository
            .list_cart_entries_by_user(&mut tx, &user)
            .await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn delete_cart_entry(&self, entry: CartEntryId) -> Result<DeleteResult, CartsServiceError> {
        debug!(cart_id = %entry, "removing cart entry");

        let mut tx = self.db.begin_transaction().await?;

        let deleted = self.repository.delete_cart_entry(&mut tx, entry).await?;

        tx.commit().await?;

        Ok(DeleteResult::new(deleted))
    }

    async fn list_cart_products(&self, user: String) -> Result<Vec<Document>, CartsServiceError> {
        let entries = self.list_cart_entries_by_user(user).await?;

        Ok(enrich_entries(self.catalog.as_ref(), entries).await)
    }
}

#[automock]
#[async_trait]
/// Cart entry operations.
pub trait CartsService: Send + Sync {
    /// Stores a cart entry verbatim under a new identifier.
    async fn create_cart_entry(
        &self,
        entry: Document,
    ) -> Result<InsertOneResult<CartEntryRecord>, CartsServiceError>;

    /// Retrieves every cart entry of every user.
    async fn list_cart_entries(&self) -> Result<Vec<CartEntryRecord>, CartsServiceError>;

    /// Retrieves the cart entries whose `user_id` equals `user`.
    async fn list_cart_entries_by_user(
        &self,
        user: String,
    ) -> Result<Vec<CartEntryRecord>, CartsServiceError>;

    /// Deletes a cart entry. Deleting an unknown entry reports a zero count.
    async fn delete_cart_entry(&self, entry: CartEntryId) -> Result<DeleteResult, CartsServiceError>;

    /// Retrieves the products in a user's cart, each tagged with its
    /// `cart_id`. Entries whose product cannot be fetched are left out.
    async fn list_cart_products(&self, user: String) -> Result<Vec<Document>, CartsServiceError>;
}
