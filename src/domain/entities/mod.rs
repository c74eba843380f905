//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A directory entry pointing at an external URL
//! - [`HostEntry`] - The alias set of one proxy or redirect rule record
//! - [`HostStatus`] - A host alias annotated with an up/down flag

pub mod host;
pub mod link;

pub use host::{HostEntry, HostStatus};
pub use link::Link;
