//! HTTP request handlers.

pub mod health;
pub mod hosts;
pub mod links;

pub use health::health_handler;
pub use hosts::hosts_handler;
pub use links::links_handler;
