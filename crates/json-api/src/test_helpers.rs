//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use eyegic_app::{context::AppContext, domain::enquiries::MockEnquiriesService};

use crate::state::State;

pub(crate) fn state_with_enquiries(enquiries: MockEnquiriesService) -> Arc<State> {
    State::from_app_context(AppContext::with_enquiries_service(Arc::new(enquiries)))
}

pub(crate) fn strict_enquiries_mock() -> MockEnquiriesService {
    let mut enquiries = MockEnquiriesService::new();

    enquiries.expect_list_enquiries().never();
    enquiries.expect_get_enquiry().never();
    enquiries.expect_create_enquiry().never();
    enquiries.expect_delete_enquiry().never();

    enquiries
}

pub(crate) fn enquiries_service(enquiries: MockEnquiriesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_enquiries(enquiries)))
            .push(route),
    )
}
