//! Host-directory trait for the remote proxy-admin service.

use crate::domain::entities::HostEntry;
use async_trait::async_trait;

/// Read-only provider of the proxy and redirect host lists.
///
/// Both operations are infallible by contract: missing configuration, network
/// failures, and malformed responses all degrade to an empty list so that
/// directory unavailability never crashes page rendering. Callers must treat
/// "no hosts" as a valid, non-exceptional outcome.
///
/// # Implementations
///
/// - [`crate::infrastructure::proxy_admin::ProxyAdminClient`] - Nginx-Proxy-Manager
///   style admin API behind a bearer-token exchange
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostDirectory: Send + Sync {
    /// Fetches the current proxy-rule host entries.
    async fn fetch_proxy_hosts(&self) -> Vec<HostEntry>;

    /// Fetches the current redirect-rule host entries.
    async fn fetch_redirect_hosts(&self) -> Vec<HostEntry>;
}
