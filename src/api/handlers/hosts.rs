//! Handler for the proxy/redirect host listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::hosts::{HostItem, HostsResponse};
use crate::state::AppState;

/// Returns the proxy and redirect host listings with up/down annotations.
///
/// # Endpoint
///
/// `GET /api/hosts`
///
/// # Behavior
///
/// Host lists come from the proxy-admin directory; each host's primary alias
/// is probed concurrently. Directory unavailability degrades to empty lists,
/// so this endpoint never fails — an unreachable admin API just renders an
/// empty page.
pub async fn hosts_handler(State(state): State<AppState>) -> Json<HostsResponse> {
    let proxy_hosts = state.host_status_service.proxy_hosts().await;
    let redirect_hosts = state.host_status_service.redirect_hosts().await;

    Json(HostsResponse {
        success: true,
        proxy_hosts: proxy_hosts.into_iter().map(HostItem::from).collect(),
        redirect_hosts: redirect_hosts.into_iter().map(HostItem::from).collect(),
    })
}
