//! Liveness probe trait for URL reachability checks.

use async_trait::async_trait;
use thiserror::Error;

/// A probe request could not produce any HTTP status.
///
/// Covers DNS failures, refused connections, timeouts, and invalid URLs.
/// Error statuses (4xx/5xx) are *not* probe errors; they are reported as
/// statuses so callers can apply their own reachability threshold.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe request failed: {0}")]
    Request(String),
}

/// Statuses below this threshold count as network-reachable.
///
/// Shared by every consumer of probe statuses so the reachability rule
/// cannot drift between call sites.
pub const REACHABLE_THRESHOLD: u16 = 400;

/// Issues a liveness probe against a URL and reports the final HTTP status.
///
/// Implementations try a lightweight method first (no body retrieval) and may
/// fall back to a full request for servers that reject it. Body content is
/// always ignored.
///
/// # Implementations
///
/// - [`crate::infrastructure::probe::HttpProbe`] - HEAD with a one-shot GET fallback
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    /// Probes `url` and returns the final HTTP status code.
    async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}
