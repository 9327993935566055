//! Enquiry Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use eyegic_app::domain::enquiries::records::{EnquiryId, EnquiryRecord};

use crate::errors::ApiError;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;

/// A stored enquiry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnquiryResponse {
    /// Unique identifier assigned by the store
    pub id: i32,

    /// Name of the person enquiring
    pub name: String,

    /// Contact email address
    pub email: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Free text message
    pub message: Option<String>,

    /// Product the enquiry is about
    pub product: Option<String>,

    /// When the enquiry was stored (RFC 3339)
    pub created_at: String,
}

impl From<EnquiryRecord> for EnquiryResponse {
    fn from(enquiry: EnquiryRecord) -> Self {
        EnquiryResponse {
            id: enquiry.id.into_raw(),
            name: enquiry.name,
            email: enquiry.email,
            phone: enquiry.phone,
            message: enquiry.message,
            product: enquiry.product,
            created_at: enquiry.created_at.to_string(),
        }
    }
}

/// Parse the `{id}` path segment, rejecting anything that is not an `i32`.
pub(crate) fn parse_enquiry_id(raw: &str) -> Result<EnquiryId, ApiError> {
    raw.parse::<i32>()
        .map(EnquiryId::from_raw)
        .map_err(|_ignored| ApiError::bad_request("Invalid enquiry id"))
}
