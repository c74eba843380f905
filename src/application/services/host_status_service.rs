//! Proxy/redirect host listings annotated with reachability.

use std::sync::Arc;

use crate::domain::directory::HostDirectory;
use crate::domain::entities::{HostEntry, HostStatus};
use crate::domain::probe::{LivenessProbe, REACHABLE_THRESHOLD};

/// Builds the displayable proxy and redirect host listings.
///
/// Each listed host is the primary alias of one directory record, annotated
/// with a plain reachability flag (probe of `https://{alias}`; no directory
/// cross-check — these hosts come *from* the directory).
pub struct HostStatusService {
    directory: Arc<dyn HostDirectory>,
    probe: Arc<dyn LivenessProbe>,
    ignored_domains: Vec<String>,
}

impl HostStatusService {
    /// Creates a new host status service.
    pub fn new(
        directory: Arc<dyn HostDirectory>,
        probe: Arc<dyn LivenessProbe>,
        ignored_domains: Vec<String>,
    ) -> Self {
        Self {
            directory,
            probe,
            ignored_domains,
        }
    }

    /// Lists proxy-rule hosts with up/down annotations.
    pub async fn proxy_hosts(&self) -> Vec<HostStatus> {
        let entries = self.directory.fetch_proxy_hosts().await;
        self.annotate(entries).await
    }

    /// Lists redirect-rule hosts with up/down annotations.
    pub async fn redirect_hosts(&self) -> Vec<HostStatus> {
        let entries = self.directory.fetch_redirect_hosts().await;
        self.annotate(entries).await
    }

    /// Probes each entry's primary alias concurrently.
    async fn annotate(&self, entries: Vec<HostEntry>) -> Vec<HostStatus> {
        let aliases: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.primary_alias())
            .filter(|alias| !self.is_ignored(alias))
            .map(str::to_string)
            .collect();

        let checks = aliases.into_iter().map(|alias| async move {
            let active = match self.probe.probe(&format!("https://{alias}")).await {
                Ok(status) => status < REACHABLE_THRESHOLD,
                Err(e) => {
                    tracing::warn!(host = %alias, error = %e, "Host probe failed");
                    false
                }
            };
            HostStatus {
                domain: alias,
                active,
            }
        });

        futures::future::join_all(checks).await
    }

    fn is_ignored(&self, alias: &str) -> bool {
        self.ignored_domains.iter().any(|d| d == alias)
    }
}
