//! Enquiries Data

use crate::domain::enquiries::errors::EnquiriesServiceError;

/// New Enquiry Data
///
/// Optional fields hold `None` rather than empty strings, so absent values are
/// persisted as `NULL`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEnquiry {
    /// Name of the person enquiring; must not be empty.
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub product: Option<String>,
}

impl NewEnquiry {
    /// Build an enquiry from raw submitted fields.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiriesServiceError::MissingName`] when `name` is absent or empty.
    pub fn from_submission(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        message: Option<String>,
        product: Option<String>,
    ) -> Result<Self, EnquiriesServiceError> {
        let name = non_empty(name).ok_or(EnquiriesServiceError::MissingName)?;

        Ok(Self {
            name,
            email: non_empty(email),
            phone: non_empty(phone),
            message: non_empty(message),
            product: non_empty(product),
        })
    }

    /// Check the invariants a stored enquiry must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiriesServiceError::MissingName`] when the name is empty.
    pub fn validate(&self) -> Result<(), EnquiriesServiceError> {
        if self.name.is_empty() {
            return Err(EnquiriesServiceError::MissingName);
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
