//! Products service errors.

use sqlx::Error;
use thiserror::Error;

use crate::documents::DocumentError;

/// Errors returned by the products service.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// No product has the requested identifier.
    #[error("product not found")]
    NotFound,

    /// The payload cannot be stored.
    #[error("invalid product document")]
    InvalidDocument(#[from] DocumentError),

    /// The store failed.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            ProductsServiceError::from(Error::RowNotFound),
            ProductsServiceError::NotFound
        ));
    }

    #[test]
    fn other_errors_map_to_sql() {
        assert!(matches!(
            ProductsServiceError::from(Error::PoolTimedOut),
            ProductsServiceError::Sql(Error::PoolTimedOut)
        ));
    }
}
