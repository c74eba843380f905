//! Proxy-admin HTTP client implementing [`HostDirectory`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::domain::directory::HostDirectory;
use crate::domain::entities::HostEntry;

const TOKENS_PATH: &str = "/api/tokens";
const PROXY_HOSTS_PATH: &str = "/api/nginx/proxy-hosts";
const REDIRECT_HOSTS_PATH: &str = "/api/nginx/redirection-hosts";

/// Token-exchange response. A missing token field decodes to the empty
/// sentinel rather than a decode error.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: String,
}

/// One proxy or redirect rule record as returned by the admin API. Only the
/// alias list is of interest; every other field is ignored.
#[derive(Debug, Deserialize)]
struct HostRecord {
    #[serde(default)]
    domain_names: Vec<String>,
}

/// Fetches proxy and redirect host lists from the admin API.
///
/// Each fetch performs a fresh token exchange; tokens are not cached or
/// refreshed, their expiry is entirely the admin service's business.
pub struct ProxyAdminClient {
    http: Client,
    base_url: Option<String>,
    identity: Option<String>,
    secret: Option<String>,
}

impl ProxyAdminClient {
    /// Creates a new client.
    ///
    /// `base_url` must not carry a trailing slash (the config loader strips
    /// it). `None` for any field turns the client into a no-op that returns
    /// empty results.
    pub fn new(
        http: Client,
        base_url: Option<String>,
        identity: Option<String>,
        secret: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url,
            identity,
            secret,
        }
    }

    /// Creates a client from the resolved configuration.
    pub fn from_config(http: Client, config: &Config) -> Self {
        Self::new(
            http,
            config.proxy_admin_url.clone(),
            config.identity.clone(),
            config.secret.clone(),
        )
    }

    /// Exchanges the configured credentials for a bearer token.
    ///
    /// Returns the empty-string sentinel, never an error, when credentials or
    /// the endpoint are unconfigured, the call fails, or the response lacks a
    /// token. Every call is a fresh network round trip.
    async fn acquire_token(&self) -> String {
        let Some(base_url) = &self.base_url else {
            return String::new();
        };
        let (Some(identity), Some(secret)) = (&self.identity, &self.secret) else {
            tracing::warn!("Proxy-admin identity or secret not configured");
            return String::new();
        };

        let response = self
            .http
            .post(format!("{base_url}{TOKENS_PATH}"))
            .json(&json!({ "identity": identity, "secret": secret }))
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Token exchange request failed");
                return String::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Token exchange rejected");
            return String::new();
        }

        match response.json::<TokenResponse>().await {
            Ok(body) if !body.token.is_empty() => body.token,
            Ok(_) => {
                tracing::warn!("Token exchange response carried no token");
                String::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token exchange response undecodable");
                String::new()
            }
        }
    }

    /// Fetches a host listing, degrading every failure to an empty list.
    async fn fetch_hosts(&self, path: &str) -> Vec<HostEntry> {
        let Some(base_url) = &self.base_url else {
            return Vec::new();
        };

        let token = self.acquire_token().await;
        if token.is_empty() {
            return Vec::new();
        }

        let response = self
            .http
            .get(format!("{base_url}{path}"))
            .bearer_auth(&token)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(path, error = %e, "Host listing request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(path, status = %response.status(), "Host listing rejected");
            return Vec::new();
        }

        match response.json::<Vec<HostRecord>>().await {
            Ok(records) => collect_entries(records),
            Err(e) => {
                tracing::warn!(path, error = %e, "Host listing undecodable");
                Vec::new()
            }
        }
    }
}

/// Converts admin records to directory entries, skipping records without any
/// domain names.
fn collect_entries(records: Vec<HostRecord>) -> Vec<HostEntry> {
    records
        .into_iter()
        .filter(|record| !record.domain_names.is_empty())
        .map(|record| HostEntry::new(record.domain_names))
        .collect()
}

#[async_trait]
impl HostDirectory for ProxyAdminClient {
    async fn fetch_proxy_hosts(&self) -> Vec<HostEntry> {
        self.fetch_hosts(PROXY_HOSTS_PATH).await
    }

    async fn fetch_redirect_hosts(&self) -> Vec<HostEntry> {
        self.fetch_hosts(REDIRECT_HOSTS_PATH).await
    }
}
