//! DTOs for the proxy/redirect host listing endpoint.

use serde::Serialize;

use crate::domain::entities::HostStatus;

/// A host alias with its up/down flag.
#[derive(Debug, Serialize)]
pub struct HostItem {
    pub domain: String,
    pub active: bool,
}

impl From<HostStatus> for HostItem {
    fn from(status: HostStatus) -> Self {
        Self {
            domain: status.domain,
            active: status.active,
        }
    }
}

/// Response for `GET /api/hosts`.
#[derive(Debug, Serialize)]
pub struct HostsResponse {
    pub success: bool,
    pub proxy_hosts: Vec<HostItem>,
    pub redirect_hosts: Vec<HostItem>,
}
