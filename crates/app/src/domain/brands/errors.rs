//! Brands service errors.

use thiserror::Error;

use crate::documents::DocumentError;

/// Errors returned by the brands service.
#[derive(Debug, Error)]
pub enum BrandsServiceError {
    /// The payload cannot be stored.
    #[error("invalid brand document")]
    InvalidDocument(#[from] DocumentError),

    /// The store failed.
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
