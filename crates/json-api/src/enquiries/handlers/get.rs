//! Get Enquiry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    enquiries::{
        errors::into_api_error,
        handlers::{EnquiryResponse, parse_enquiry_id},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Enquiry Handler
///
/// Returns a single enquiry.
#[endpoint(
    tags("enquiries"),
    summary = "Get Enquiry",
    responses(
        (status_code = StatusCode::OK, description = "Enquiry"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid id"),
        (status_code = StatusCode::NOT_FOUND, description = "Enquiry not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to fetch enquiry"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<EnquiryResponse>, ApiError> {
    let id = parse_enquiry_id(&id.into_inner())?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let enquiry = state
        .app
        .enquiries
        .get_enquiry(id)
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch enquiry"))?;

    Ok(Json(enquiry.into()))
}
