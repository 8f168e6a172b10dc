//! Carts service errors.

use thiserror::Error;

use crate::documents::DocumentError;

/// Errors returned by the carts service.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The payload cannot be stored.
    #[error("invalid cart entry document")]
    InvalidDocument(#[from] DocumentError),

    /// The store failed.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
