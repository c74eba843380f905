//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AvailabilityService, HostStatusService, LinkService};

/// Application state shared across request handlers.
///
/// Services are behind `Arc` so cloning the state per request stays cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub availability_service: Arc<AvailabilityService>,
    pub host_status_service: Arc<HostStatusService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        link_service: Arc<LinkService>,
        availability_service: Arc<AvailabilityService>,
        host_status_service: Arc<HostStatusService>,
    ) -> Self {
        Self {
            link_service,
            availability_service,
            host_status_service,
        }
    }
}
