//! App Router

use salvo::{
    Router, Service,
    catcher::Catcher,
    cors::{AllowHeaders, AllowOrigin, Cors, CorsHandler},
    http::Method,
};

use crate::{enquiries, errors, healthcheck, observability};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("api/enquiries")
                .get(enquiries::index::handler)
                .post(enquiries::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(enquiries::get::handler)
                        .delete(enquiries::delete::handler),
                ),
        )
}

/// Any origin may read and submit enquiries.
pub fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE])
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

/// Wrap a router with CORS and JSON error pages.
pub fn service(router: Router) -> Service {
    Service::new(router)
        .catcher(Catcher::default().hoop(errors::json_error_catcher))
        .hoop(cors())
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use eyegic_app::domain::enquiries::MockEnquiriesService;

    use crate::{
        enquiries::tests::make_enquiry,
        errors::ErrorResponse,
        test_helpers::{state_with_enquiries, strict_enquiries_mock},
    };

    use super::*;

    fn make_service(enquiries: MockEnquiriesService) -> Service {
        service(
            Router::new()
                .hoop(inject(state_with_enquiries(enquiries)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_routes_enquiry_by_id() -> TestResult {
        let mut enquiries = MockEnquiriesService::new();

        enquiries
            .expect_get_enquiry()
            .once()
            .return_once(|id| Ok(make_enquiry(id.into_raw(), "Asha")));

        let mut res = TestClient::get("http://example.com/api/enquiries/3")
            .send(&make_service(enquiries))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["id"], 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() -> TestResult {
        let mut enquiries = MockEnquiriesService::new();

        enquiries
            .expect_list_enquiries()
            .once()
            .return_once(|| Ok(vec![]));

        let res = TestClient::get("http://example.com/api/enquiries")
            .add_header("origin", "https://eyegic.example", true)
            .send(&make_service(enquiries))
            .await;

        let allowed = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(allowed, Some("*"));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_id_returns_json_error() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/enquiries/abc")
            .send(&make_service(strict_enquiries_mock()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid enquiry id");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_error() -> TestResult {
        let mut res = TestClient::get("http://example.com/api/unknown")
            .send(&make_service(strict_enquiries_mock()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.error.is_empty(), "error should be a message string");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_json_returns_json_error() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/enquiries")
            .raw_json("{not json")
            .send(&make_service(strict_enquiries_mock()))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid request body");

        Ok(())
    }
}
