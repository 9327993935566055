//! Delete Enquiry Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    enquiries::{
        errors::into_api_error,
        handlers::{EnquiryResponse, parse_enquiry_id},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Enquiry Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EnquiryDeletedResponse {
    /// Confirmation message
    pub message: String,

    /// The enquiry as it was before deletion
    pub enquiry: EnquiryResponse,
}

/// Delete Enquiry Handler
#[endpoint(
    tags("enquiries"),
    summary = "Delete Enquiry",
    responses(
        (status_code = StatusCode::OK, description = "Enquiry deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid id"),
        (status_code = StatusCode::NOT_FOUND, description = "Enquiry not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to delete enquiry"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<EnquiryDeletedResponse>, ApiError> {
    let id = parse_enquiry_id(&id.into_inner())?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let enquiry = state
        .app
        .enquiries
        .delete_enquiry(id)
        .await
        .map_err(|error| into_api_error(error, "Failed to delete enquiry"))?;

    Ok(Json(EnquiryDeletedResponse {
        message: "Enquiry deleted successfully".to_string(),
        enquiry: enquiry.into(),
    }))
}
