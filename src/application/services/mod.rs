//! Business logic services for the application layer.

pub mod availability_service;
pub mod host_status_service;
pub mod link_service;

pub use availability_service::AvailabilityService;
pub use host_status_service::HostStatusService;
pub use link_service::LinkService;
