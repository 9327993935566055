//! Enquiry Errors

use tracing::error;

use eyegic_app::domain::enquiries::EnquiriesServiceError;

use crate::errors::ApiError;

/// Map a service error to its HTTP response. `failure` is the message used for storage errors.
pub(crate) fn into_api_error(error: EnquiriesServiceError, failure: &str) -> ApiError {
    match error {
        EnquiriesServiceError::MissingName => ApiError::bad_request("Name is required"),
        EnquiriesServiceError::NotFound => ApiError::not_found("Enquiry not found"),
        EnquiriesServiceError::Sql(source) => {
            error!("{failure}: {source}");

            ApiError::internal(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_name_is_bad_request() {
        let error = into_api_error(EnquiriesServiceError::MissingName, "Failed to create enquiry");

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Name is required");
    }

    #[test]
    fn not_found_ignores_failure_message() {
        let error = into_api_error(EnquiriesServiceError::NotFound, "Failed to fetch enquiry");

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Enquiry not found");
    }

    #[test]
    fn storage_error_uses_failure_message() {
        let error = into_api_error(
            EnquiriesServiceError::Sql(sqlx::Error::PoolTimedOut),
            "Failed to delete enquiry",
        );

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Failed to delete enquiry");
    }
}
