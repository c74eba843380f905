mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::{MockDirectory, MockLinkRepo, MockProbe, StateConfig, entry};
use link_directory::api::handlers::hosts_handler;
use link_directory::state::AppState;
use serde_json::json;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/hosts", get(hosts_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_hosts_annotated_with_probe_results() {
    let mut directory = MockDirectory::new();
    directory
        .expect_fetch_proxy_hosts()
        .returning(|| vec![entry(&["api.etran.dev"]), entry(&["blog.etran.dev"])]);
    directory
        .expect_fetch_redirect_hosts()
        .returning(|| vec![entry(&["old.etran.dev"])]);

    let mut probe = MockProbe::new();
    probe
        .expect_probe()
        .withf(|url| url == "https://api.etran.dev")
        .returning(|_| Ok(200));
    probe
        .expect_probe()
        .withf(|url| url == "https://blog.etran.dev")
        .returning(|_| Ok(502));
    probe
        .expect_probe()
        .withf(|url| url == "https://old.etran.dev")
        .returning(|_| Ok(301));

    let state = common::create_test_state(
        MockLinkRepo::new(),
        directory,
        probe,
        StateConfig::default(),
    );
    let server = make_server(state);

    let response = server.get("/api/hosts").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["proxy_hosts"],
        json!([
            { "domain": "api.etran.dev", "active": true },
            { "domain": "blog.etran.dev", "active": false },
        ])
    );
    assert_eq!(
        body["redirect_hosts"],
        json!([{ "domain": "old.etran.dev", "active": true }])
    );
}

#[tokio::test]
async fn test_hosts_directory_outage_yields_empty_lists() {
    // A dead admin API degrades to empty listings, not an error response.
    let mut directory = MockDirectory::new();
    directory.expect_fetch_proxy_hosts().returning(Vec::new);
    directory.expect_fetch_redirect_hosts().returning(Vec::new);

    let state = common::create_test_state(
        MockLinkRepo::new(),
        directory,
        MockProbe::new(),
        StateConfig::default(),
    );
    let server = make_server(state);

    let response = server.get("/api/hosts").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["proxy_hosts"], json!([]));
    assert_eq!(body["redirect_hosts"], json!([]));
}

#[tokio::test]
async fn test_hosts_ignored_domains_hidden() {
    let mut directory = MockDirectory::new();
    directory
        .expect_fetch_proxy_hosts()
        .returning(|| vec![entry(&["api.etran.dev"]), entry(&["staging.etran.dev"])]);
    directory.expect_fetch_redirect_hosts().returning(Vec::new);

    let mut probe = MockProbe::new();
    probe
        .expect_probe()
        .withf(|url| url == "https://api.etran.dev")
        .returning(|_| Ok(200));

    let state = common::create_test_state(
        MockLinkRepo::new(),
        directory,
        probe,
        StateConfig {
            ignored_domains: vec!["staging.etran.dev".to_string()],
            ..StateConfig::default()
        },
    );
    let server = make_server(state);

    let response = server.get("/api/hosts").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["proxy_hosts"],
        json!([{ "domain": "api.etran.dev", "active": true }])
    );
}
