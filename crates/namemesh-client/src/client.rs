//! Main directory API client implementation.

use crate::api::*;
use namemesh_core::{NameMeshError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default directory API base URL
const DEFAULT_BASE_URL: &str = "http://localhost:14123";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A session against one directory node.
///
/// The client is the explicitly passed context object: construct one per
/// server and hand it around. Nothing here is process-global, so sessions
/// against different directory nodes can coexist (e.g. administering a
/// remote node next to the local one). Cloning is cheap.
#[derive(Clone)]
pub struct DirectoryClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    timeout: Duration,
}

/// Mutation outcome envelope used by the directory:
/// `{"result": "success"}` or `{"result": "error", "reason": "..."}`.
#[derive(Debug, Deserialize)]
struct Outcome {
    result: String,
    #[serde(default)]
    reason: Option<String>,
}

impl DirectoryClient {
    /// Create a client for the given base URL using default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        DirectoryClientBuilder::new().base_url(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> DirectoryClientBuilder {
        DirectoryClientBuilder::new()
    }

    /// Access source state and name-claim endpoints
    #[must_use]
    pub fn sources(&self) -> SourceApi<'_> {
        SourceApi::new(self)
    }

    /// Access zone mutation endpoints
    #[must_use]
    pub fn zones(&self) -> ZoneApi<'_> {
        ZoneApi::new(self)
    }

    /// Access peer-list / trust-list endpoints
    #[must_use]
    pub fn rosters(&self) -> RosterApi<'_> {
        RosterApi::new(self)
    }

    /// Access read-only node inspection endpoints
    #[must_use]
    pub fn node(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, params);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with a JSON body, expecting the outcome envelope
    pub(crate) async fn post_outcome<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.handle_outcome(response).await
    }

    /// Perform a DELETE request, expecting the outcome envelope
    pub(crate) async fn delete_outcome(&self, path: &str) -> Result<()> {
        let url = self.build_url(path, &[]);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        self.handle_outcome(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{}", self.inner.base_url, path);

        let mut sep = '?';
        for (key, value) in params {
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            sep = '&';
        }

        url
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.map_transport(e))?;
            serde_json::from_str(&body).map_err(|e| NameMeshError::Decode(e.to_string()))
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle a mutation response carrying the outcome envelope.
    ///
    /// An explicit error result is a rejection and maps to `Conflict`
    /// with the service's reason verbatim; an undecodable body means we
    /// cannot tell whether the submission applied, so it maps to `Decode`.
    async fn handle_outcome(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            return self.handle_error(status.as_u16(), response).await;
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport(e))?;
        let outcome: Outcome =
            serde_json::from_str(&body).map_err(|e| NameMeshError::Decode(e.to_string()))?;

        if outcome.result == "success" {
            Ok(())
        } else {
            let reason = outcome
                .reason
                .unwrap_or_else(|| "no reason given".to_string());
            warn!(reason = %reason, "directory rejected submission");
            Err(NameMeshError::Conflict { reason })
        }
    }

    /// Convert an error response to a `NameMeshError`
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Try to parse an error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("reason"))
                    .and_then(|e| e.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        match status {
            404 => Err(NameMeshError::NotFound { resource: message }),
            _ => Err(NameMeshError::Api {
                code: status,
                message,
            }),
        }
    }

    /// Map a reqwest failure onto the transport taxonomy
    fn map_transport(&self, e: reqwest::Error) -> NameMeshError {
        if e.is_timeout() {
            NameMeshError::Timeout(self.inner.timeout.as_secs())
        } else {
            NameMeshError::Transport(e.to_string())
        }
    }
}

/// Builder for configuring a [`DirectoryClient`]
pub struct DirectoryClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for DirectoryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryClientBuilder {
    /// Create a new builder pointed at the local node
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("namemesh-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL of the directory node
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> DirectoryClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        DirectoryClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                timeout: self.timeout,
            }),
        }
    }
}

// URL encoding helper
pub(crate) mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
