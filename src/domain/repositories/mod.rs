//! Repository trait definitions for the domain layer.
//!
//! Traits here abstract data access following the Repository pattern and are
//! implemented by concrete repositories in `crate::infrastructure::persistence`.
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
