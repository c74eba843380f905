//! URL availability decisions.
//!
//! Whether a link is shown as "active" combines two signals: a network
//! liveness probe, and — for URLs under the operator's own authoritative
//! domain — membership in the proxy/redirect host directory. An on-domain
//! hostname can resolve at the network level (stale DNS, catch-all vhost)
//! without being a registered, intentionally-exposed route; the directory
//! cross-check distinguishes "technically answers" from "administratively
//! recognized".

use std::sync::Arc;

use crate::domain::directory::HostDirectory;
use crate::domain::probe::{LivenessProbe, REACHABLE_THRESHOLD};
use crate::utils::host_match::{matches_any_alias, post_scheme};

/// Decides whether a given URL is "active" for display purposes.
///
/// The check never errors: every failure path degrades to a boolean so a
/// slow or broken upstream renders a link as inactive, never a crashed page.
pub struct AvailabilityService {
    probe: Arc<dyn LivenessProbe>,
    directory: Arc<dyn HostDirectory>,
    /// Authoritative domain substring gating the directory cross-check.
    domain_name: Option<String>,
    /// Whether a proxy-admin endpoint is configured at all.
    directory_configured: bool,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        probe: Arc<dyn LivenessProbe>,
        directory: Arc<dyn HostDirectory>,
        domain_name: Option<String>,
        directory_configured: bool,
    ) -> Self {
        Self {
            probe,
            directory,
            domain_name,
            directory_configured,
        }
    }

    /// Returns whether the checker has the configuration it needs to do real
    /// work. When `false`, [`Self::is_active`] reports every URL as active.
    pub fn is_configured(&self) -> bool {
        self.directory_configured && self.domain_name.is_some()
    }

    /// Decides whether `url` is active.
    ///
    /// # Decision sequence
    ///
    /// 1. Checker unconfigured (no admin endpoint or no authoritative domain)
    ///    → `true`, so the directory UI works before configuration.
    /// 2. Liveness probe. Reachable iff the final status is below 400; a probe
    ///    that cannot produce a status at all → `false`.
    /// 3. Not reachable → `false`, regardless of directory contents.
    /// 4. Reachable off-domain URL → `true`; reachability alone suffices for
    ///    external, unmanaged links.
    /// 5. Reachable on-domain URL → `true` only if the post-scheme remainder
    ///    prefix-matches an alias in the combined redirect+proxy set.
    pub async fn is_active(&self, url: &str) -> bool {
        if !self.directory_configured {
            return true;
        }
        let Some(domain_name) = &self.domain_name else {
            return true;
        };

        let status = match self.probe.probe(url).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(url, error = %e, "Liveness probe failed");
                return false;
            }
        };

        if status >= REACHABLE_THRESHOLD {
            tracing::debug!(url, status, "URL not reachable");
            return false;
        }

        if !url.contains(domain_name.as_str()) {
            return true;
        }

        // On-domain: reachability is necessary but not sufficient. The host
        // must also be administratively recognized.
        let mut entries = self.directory.fetch_redirect_hosts().await;
        entries.extend(self.directory.fetch_proxy_hosts().await);

        match post_scheme(url) {
            Some(target) => matches_any_alias(target, &entries),
            None => false,
        }
    }

    /// Checks a batch of URLs concurrently.
    ///
    /// Each check is fully independent: no shared mutable state and no
    /// ordering requirement between checks. Results are returned in input
    /// order as `(url, active)` pairs.
    pub async fn check_all(&self, urls: &[String]) -> Vec<(String, bool)> {
        let checks = urls
            .iter()
            .map(|url| async move { (url.clone(), self.is_active(url).await) });
        futures::future::join_all(checks).await
    }
}
