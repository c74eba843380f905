//! API route configuration.

use crate::api::handlers::{hosts_handler, links_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /links` - Link directory with per-link availability flags
/// - `GET /hosts` - Proxy/redirect host listings with up/down annotations
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(links_handler))
        .route("/hosts", get(hosts_handler))
}
