//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::data::ProductValidationError;

/// Failures surfaced by [`ProductsService`](super::ProductsService) operations.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// A unique constraint rejected the write.
    #[error("product already exists")]
    AlreadyExists,

    /// No product has the requested id.
    #[error("product not found")]
    NotFound,

    /// A foreign key pointed at a missing row.
    #[error("related resource not found")]
    InvalidReference,

    /// A required column was null.
    #[error("missing required data")]
    MissingRequiredData,

    /// A check constraint rejected the row.
    #[error("invalid data")]
    InvalidData,

    /// The payload failed validation before reaching storage.
    #[error(transparent)]
    Validation(#[from] ProductValidationError),

    /// Any other database failure.
    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
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
            ProductsServiceError::Sql(_)
        ));
    }

    #[test]
    fn validation_errors_keep_their_message() {
        let error = ProductsServiceError::from(ProductValidationError::EmptyName);

        assert_eq!(error.to_string(), "product name must not be empty");
    }
}
