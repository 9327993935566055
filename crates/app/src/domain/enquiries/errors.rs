//! Enquiries service errors.

use sqlx::Error;
use thiserror::Error;

/// Enquiry service error variants.
#[derive(Debug, Error)]
pub enum EnquiriesServiceError {
    /// The submitted enquiry had no name.
    #[error("name is required")]
    MissingName,

    /// No enquiry has the requested id.
    #[error("enquiry not found")]
    NotFound,

    /// Underlying SQL/storage error.
    #[error("storage error: {0}")]
    Sql(#[source] Error),
}

impl From<Error> for EnquiriesServiceError {
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
        let error = EnquiriesServiceError::from(Error::RowNotFound);

        assert!(matches!(error, EnquiriesServiceError::NotFound));
    }

    #[test]
    fn pool_timeout_maps_to_sql() {
        let error = EnquiriesServiceError::from(Error::PoolTimedOut);

        assert!(matches!(
            error,
            EnquiriesServiceError::Sql(Error::PoolTimedOut)
        ));
    }
}
