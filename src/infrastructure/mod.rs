//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound HTTP.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`proxy_admin`] - Nginx-Proxy-Manager-style admin API client
//! - [`probe`] - HTTP liveness probe

pub mod persistence;
pub mod probe;
pub mod proxy_admin;
