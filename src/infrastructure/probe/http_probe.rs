//! HEAD-then-GET liveness probe implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::probe::{LivenessProbe, ProbeError, REACHABLE_THRESHOLD};

/// Returns whether a HEAD status warrants retrying with a full GET.
///
/// Some servers reject lightweight probes outright (405, 403, or a blanket
/// 5xx) while serving GET fine, so any error status gets one full retry.
fn needs_get_fallback(status: u16) -> bool {
    status >= REACHABLE_THRESHOLD
}

/// Probes reachability with a HEAD request, falling back to GET once when the
/// HEAD reports an error status. Body content is never read.
///
/// A transport-level failure on HEAD is not retried; it surfaces as
/// [`ProbeError`] and callers treat it as "down".
pub struct HttpProbe {
    http: Client,
}

impl HttpProbe {
    /// Creates a new probe sharing the given HTTP client.
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LivenessProbe for HttpProbe {
    async fn probe(&self, url: &str) -> Result<u16, ProbeError> {
        let head_status = self
            .http
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::Request(e.to_string()))?
            .status()
            .as_u16();

        if !needs_get_fallback(head_status) {
            return Ok(head_status);
        }

        tracing::debug!(url, head_status, "HEAD probe rejected, retrying with GET");

        let get_status = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::Request(e.to_string()))?
            .status()
            .as_u16();

        Ok(get_status)
    }
}
