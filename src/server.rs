//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, outbound HTTP client setup, service wiring,
//! and Axum server lifecycle.

use crate::application::services::{AvailabilityService, HostStatusService, LinkService};
use crate::config::Config;
use crate::infrastructure::persistence::PgLinkRepository;
use crate::infrastructure::probe::HttpProbe;
use crate::infrastructure::proxy_admin::ProxyAdminClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Shared outbound HTTP client (probes + proxy-admin calls)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - The outbound HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    // One client for every outbound call; reqwest clients are cheap to clone
    // and share a connection pool.
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.probe_timeout))
        .build()
        .context("Failed to build HTTP client")?;

    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let probe = Arc::new(HttpProbe::new(http.clone()));
    let directory = Arc::new(ProxyAdminClient::from_config(http, &config));

    let link_service = Arc::new(LinkService::new(
        link_repository,
        config.ignored_domains.clone(),
    ));
    let availability_service = Arc::new(AvailabilityService::new(
        probe.clone(),
        directory.clone(),
        config.domain_name.clone(),
        config.is_directory_configured(),
    ));
    let host_status_service = Arc::new(HostStatusService::new(
        directory,
        probe,
        config.ignored_domains.clone(),
    ));

    let state = AppState::new(link_service, availability_service, host_status_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
