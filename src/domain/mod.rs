//! Domain layer containing business entities and trait seams.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities and the trait contracts implemented by the
//! infrastructure layer, independent of any concrete database or HTTP client.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`directory`] - Remote host-directory trait (proxy/redirect host lists)
//! - [`probe`] - Liveness probe trait for reachability checks
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod directory;
pub mod entities;
pub mod probe;
pub mod repositories;
