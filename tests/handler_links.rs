mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{MockDirectory, MockLinkRepo, MockProbe, StateConfig, link};
use link_directory::api::handlers::links_handler;
use link_directory::error::AppError;
use link_directory::state::AppState;
use serde_json::json;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_links_success_shape() {
    let mut repo = MockLinkRepo::new();
    repo.expect_list_all().returning(|| {
        Ok(vec![
            link(1, "GitHub", "https://github.com/x"),
            link(2, "API", "https://unknown.etran.dev"),
        ])
    });

    let mut probe = MockProbe::new();
    probe.expect_probe().returning(|_| Ok(200));

    // On-domain link resolves but is not a registered host.
    let mut directory = MockDirectory::new();
    directory.expect_fetch_redirect_hosts().returning(Vec::new);
    directory
        .expect_fetch_proxy_hosts()
        .returning(|| vec![common::entry(&["api.etran.dev"])]);

    let state = common::create_test_state(repo, directory, probe, StateConfig::default());
    let server = make_server(state);

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["links"].as_array().unwrap().len(), 2);
    assert_eq!(body["links"][0]["title"], json!("GitHub"));
    assert_eq!(
        body["linksActive"],
        json!([
            { "link": "https://github.com/x", "active": true },
            { "link": "https://unknown.etran.dev", "active": false },
        ])
    );
}

#[tokio::test]
async fn test_links_sets_cache_control() {
    let mut repo = MockLinkRepo::new();
    repo.expect_list_all().returning(|| Ok(Vec::new()));

    let state = common::create_test_state(
        repo,
        MockDirectory::new(),
        MockProbe::new(),
        StateConfig::default(),
    );
    let server = make_server(state);

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let headers = response.headers();
    assert_eq!(
        headers.get("cache-control").unwrap(),
        "public, s-maxage=1200, stale-while-revalidate=600"
    );
}

#[tokio::test]
async fn test_links_database_error_returns_500() {
    let mut repo = MockLinkRepo::new();
    repo.expect_list_all()
        .returning(|| Err(AppError::internal("Database error", json!({}))));

    let state = common::create_test_state(
        repo,
        MockDirectory::new(),
        MockProbe::new(),
        StateConfig::default(),
    );
    let server = make_server(state);

    let response = server.get("/api/links").await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], json!(false));
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_links_ignored_domain_filtered_out() {
    let mut repo = MockLinkRepo::new();
    repo.expect_list_all().returning(|| {
        Ok(vec![
            link(1, "Public", "https://github.com/x"),
            link(2, "Internal", "https://internal.etran.dev/admin"),
        ])
    });

    let mut probe = MockProbe::new();
    probe
        .expect_probe()
        .withf(|url| url == "https://github.com/x")
        .returning(|_| Ok(200));

    let state = common::create_test_state(
        repo,
        MockDirectory::new(),
        probe,
        StateConfig {
            ignored_domains: vec!["internal.etran.dev".to_string()],
            ..StateConfig::default()
        },
    );
    let server = make_server(state);

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let links = body["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["title"], json!("Public"));
    // The hidden link gets no availability entry either.
    assert_eq!(body["linksActive"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_links_unconfigured_checker_reports_all_active() {
    let mut repo = MockLinkRepo::new();
    repo.expect_list_all()
        .returning(|| Ok(vec![link(1, "Portfolio", "https://etran.dev")]));

    // Probe carries no expectations: fail-open must not touch the network.
    let state = common::create_test_state(
        repo,
        MockDirectory::new(),
        MockProbe::new(),
        StateConfig {
            directory_configured: false,
            ..StateConfig::default()
        },
    );
    let server = make_server(state);

    let response = server.get("/api/links").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["linksActive"],
        json!([{ "link": "https://etran.dev", "active": true }])
    );
}
