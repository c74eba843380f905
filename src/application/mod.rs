//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository,
//! directory, and probe calls. Services consume domain traits and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link listing and ignore-list filtering
//! - [`services::availability_service::AvailabilityService`] - URL availability decisions
//! - [`services::host_status_service::HostStatusService`] - Proxy/redirect host listings

pub mod services;
