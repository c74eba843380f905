//! Utility functions shared across layers.

pub mod host_match;
