#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use link_directory::application::services::{
    AvailabilityService, HostStatusService, LinkService,
};
use link_directory::domain::directory::HostDirectory;
use link_directory::domain::entities::{HostEntry, Link};
use link_directory::domain::probe::{LivenessProbe, ProbeError};
use link_directory::domain::repositories::LinkRepository;
use link_directory::error::AppError;
use link_directory::state::AppState;

mockall::mock! {
    pub LinkRepo {}

    #[async_trait]
    impl LinkRepository for LinkRepo {
        async fn list_all(&self) -> Result<Vec<Link>, AppError>;
        async fn count(&self) -> Result<i64, AppError>;
    }
}

mockall::mock! {
    pub Directory {}

    #[async_trait]
    impl HostDirectory for Directory {
        async fn fetch_proxy_hosts(&self) -> Vec<HostEntry>;
        async fn fetch_redirect_hosts(&self) -> Vec<HostEntry>;
    }
}

mockall::mock! {
    pub Probe {}

    #[async_trait]
    impl LivenessProbe for Probe {
        async fn probe(&self, url: &str) -> Result<u16, ProbeError>;
    }
}

/// Configuration knobs for a mocked application state.
pub struct StateConfig {
    pub domain_name: Option<String>,
    pub directory_configured: bool,
    pub ignored_domains: Vec<String>,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            domain_name: Some("etran.dev".to_string()),
            directory_configured: true,
            ignored_domains: Vec::new(),
        }
    }
}

/// Builds an [`AppState`] from mocked trait implementations.
///
/// The same directory and probe mocks back both the availability checker and
/// the host status listings, mirroring production wiring.
pub fn create_test_state(
    repo: MockLinkRepo,
    directory: MockDirectory,
    probe: MockProbe,
    config: StateConfig,
) -> AppState {
    let directory: Arc<dyn HostDirectory> = Arc::new(directory);
    let probe: Arc<dyn LivenessProbe> = Arc::new(probe);

    let link_service = Arc::new(LinkService::new(
        Arc::new(repo),
        config.ignored_domains.clone(),
    ));
    let availability_service = Arc::new(AvailabilityService::new(
        probe.clone(),
        directory.clone(),
        config.domain_name,
        config.directory_configured,
    ));
    let host_status_service = Arc::new(HostStatusService::new(
        directory,
        probe,
        config.ignored_domains,
    ));

    AppState::new(link_service, availability_service, host_status_service)
}

pub fn link(id: i64, title: &str, url: &str) -> Link {
    Link::new(
        id,
        title.to_string(),
        url.to_string(),
        format!("{title} description"),
        None,
    )
}

pub fn entry(aliases: &[&str]) -> HostEntry {
    HostEntry::new(aliases.iter().map(|s| s.to_string()).collect())
}
