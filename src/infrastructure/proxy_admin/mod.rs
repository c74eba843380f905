//! Client for the Nginx-Proxy-Manager-style admin API.
//!
//! The admin service exposes proxy-rule and redirect-rule listings behind a
//! bearer-token exchange. Everything here fails open to empty results: a
//! directory outage makes on-domain hosts appear unrecognized, never breaks
//! the page.

pub mod client;

pub use client::ProxyAdminClient;
