//! Enquiry Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    enquiries::{errors::into_api_error, handlers::EnquiryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Enquiry Index Handler
///
/// Returns every enquiry, most recent first.
#[endpoint(
    tags("enquiries"),
    summary = "List Enquiries",
    responses(
        (status_code = StatusCode::OK, description = "Enquiries, newest first"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to fetch enquiries"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<EnquiryResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let enquiries = state
        .app
        .enquiries
        .list_enquiries()
        .await
        .map_err(|error| into_api_error(error, "Failed to fetch enquiries"))?;

    Ok(Json(enquiries.into_iter().map(Into::into).collect()))
}
