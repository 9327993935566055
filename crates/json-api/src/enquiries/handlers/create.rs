//! Create Enquiry Handler

use std::sync::Arc;

use salvo::{
    http::{ParseError, header::LOCATION, mime},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use eyegic_app::domain::enquiries::{EnquiriesServiceError, data::NewEnquiry};

use crate::{
    enquiries::{errors::into_api_error, handlers::EnquiryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

const CREATE_FAILED: &str = "Failed to create enquiry";

/// Create Enquiry Request
///
/// Accepted as JSON or as an urlencoded form. Every field is optional on the
/// wire; a missing or empty `name` is rejected.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateEnquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub product: Option<String>,
}

impl TryFrom<CreateEnquiryRequest> for NewEnquiry {
    type Error = EnquiriesServiceError;

    fn try_from(request: CreateEnquiryRequest) -> Result<Self, Self::Error> {
        NewEnquiry::from_submission(
            request.name,
            request.email,
            request.phone,
            request.message,
            request.product,
        )
    }
}

/// Read a JSON or urlencoded form body. An empty body, or one of any other
/// content type, is an empty submission.
async fn read_submission(req: &mut Request) -> Result<CreateEnquiryRequest, ApiError> {
    let Some(content_type) = req.content_type() else {
        return Ok(CreateEnquiryRequest::default());
    };

    if content_type.subtype() == mime::WWW_FORM_URLENCODED {
        return req
            .parse_form::<CreateEnquiryRequest>()
            .await
            .map_err(|error| invalid_body(&error));
    }

    if content_type.subtype() != mime::JSON {
        return Ok(CreateEnquiryRequest::default());
    }

    // The JSON body is cached after the first read, so this does not consume it.
    let is_empty = req
        .payload()
        .await
        .map_err(|error| invalid_body(&error))?
        .is_empty();

    if is_empty {
        return Ok(CreateEnquiryRequest::default());
    }

    req.parse_json::<CreateEnquiryRequest>()
        .await
        .map_err(|error| invalid_body(&error))
}

fn invalid_body(error: &ParseError) -> ApiError {
    warn!("rejected enquiry body: {error}");

    ApiError::bad_request("Invalid request body")
}

/// Create Enquiry Handler
#[endpoint(
    tags("enquiries"),
    summary = "Create Enquiry",
    request_body = CreateEnquiryRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Enquiry created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Name is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to create enquiry"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EnquiryResponse>, ApiError> {
    let submission = read_submission(req).await?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let enquiry =
        NewEnquiry::try_from(submission).map_err(|error| into_api_error(error, CREATE_FAILED))?;

    let enquiry = state
        .app
        .enquiries
        .create_enquiry(enquiry)
        .await
        .map_err(|error| into_api_error(error, CREATE_FAILED))?;

    res.add_header(LOCATION, format!("/api/enquiries/{}", enquiry.id), true)
        .or_500(CREATE_FAILED)?
        .status_code(StatusCode::CREATED);

    Ok(Json(enquiry.into()))
}
