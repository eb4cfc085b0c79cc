//! GraphQL HTTP client implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use tlx_auth::TokenStore;

use crate::error::GraphqlClientError;
use crate::operation::{GraphqlOperation, GraphqlRequest, GraphqlResponse};

/// GraphQL client metrics.
#[derive(Debug, Default)]
pub struct GraphqlClientMetrics {
    requests_total: AtomicU64,
    requests_success: AtomicU64,
    requests_error: AtomicU64,
    requests_unauthorized: AtomicU64,
}

impl GraphqlClientMetrics {
    /// Snapshot current metrics.
    #[must_use]
    pub fn snapshot(&self) -> GraphqlClientMetricsSnapshot {
        GraphqlClientMetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_success: self.requests_success.load(Ordering::Relaxed),
            requests_error: self.requests_error.load(Ordering::Relaxed),
            requests_unauthorized: self.requests_unauthorized.load(Ordering::Relaxed),
        }
    }
}

/// Metrics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphqlClientMetricsSnapshot {
    /// Total requests issued.
    pub requests_total: u64,
    /// Requests that returned data without GraphQL errors.
    pub requests_success: u64,
    /// Requests that failed or carried GraphQL errors.
    pub requests_error: u64,
    /// Requests rejected for a bad or expired credential.
    pub requests_unauthorized: u64,
}

/// GraphQL client configuration.
#[derive(Debug, Clone)]
pub struct GraphqlClientConfig {
    /// Service name used in log lines.
    pub service_name: String,
    /// Default headers applied to every request.
    pub headers: HeaderMap,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for GraphqlClientConfig {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            service_name: "graphql".to_string(),
            headers,
            timeout: Duration::from_secs(30),
        }
    }
}

/// GraphQL client builder.
#[derive(Debug, Clone)]
pub struct GraphqlClientBuilder {
    endpoint: String,
    config: GraphqlClientConfig,
}

impl GraphqlClientBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            config: GraphqlClientConfig::default(),
        }
    }

    /// Set the service name used in log lines.
    #[must_use]
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.config.service_name = service_name.into();
        self
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.headers.insert(name, value);
        self
    }

    /// Set timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client over the given token store.
    pub fn build(self, tokens: TokenStore) -> Result<GraphqlClient, GraphqlClientError> {
        GraphqlClient::with_config(self.endpoint, self.config, tokens)
    }
}

/// GraphQL client.
///
/// The `Authorization` header is read fresh from the token store on every
/// request; the client never caches a credential across calls and never
/// mutates the store.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    endpoint: String,
    http: reqwest::Client,
    config: GraphqlClientConfig,
    tokens: TokenStore,
    metrics: Arc<GraphqlClientMetrics>,
}

impl GraphqlClient {
    /// Create a client with custom configuration.
    pub fn with_config(
        endpoint: impl Into<String>,
        config: GraphqlClientConfig,
        tokens: TokenStore,
    ) -> Result<Self, GraphqlClientError> {
        let endpoint = endpoint.into();
        Url::parse(&endpoint).map_err(|err| GraphqlClientError::Protocol {
            message: format!("invalid endpoint URL: {err}"),
        })?;
        let http = reqwest::Client::builder()
            .default_headers(config.headers.clone())
            .timeout(config.timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            endpoint,
            http,
            config,
            tokens,
            metrics: Arc::new(GraphqlClientMetrics::default()),
        })
    }

    /// Return the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Return client metrics snapshot.
    #[must_use]
    pub fn metrics(&self) -> GraphqlClientMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Execute a typed operation and return the full response.
    pub async fn execute<O: GraphqlOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<GraphqlResponse<O::ResponseData>, GraphqlClientError> {
        let request =
            GraphqlRequest::new(O::QUERY, variables).with_operation_name(O::OPERATION_NAME);
        self.execute_request(request).await
    }

    /// Execute a typed operation and return data only (error on GraphQL errors).
    pub async fn execute_strict<O: GraphqlOperation>(
        &self,
        variables: O::Variables,
    ) -> Result<O::ResponseData, GraphqlClientError> {
        let result = self.execute::<O>(variables).await?.into_result();
        if matches!(result, Err(ref err) if err.is_unauthorized()) {
            self.metrics
                .requests_unauthorized
                .fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    /// Execute an untyped request with JSON variables and payload.
    pub async fn execute_value(
        &self,
        query: impl Into<String>,
        variables: serde_json::Value,
    ) -> Result<GraphqlResponse<serde_json::Value>, GraphqlClientError> {
        self.execute_request(GraphqlRequest::new(query, variables))
            .await
    }

    /// Execute an arbitrary request.
    pub async fn execute_request<V, R>(
        &self,
        request: GraphqlRequest<V>,
    ) -> Result<GraphqlResponse<R>, GraphqlClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(&request)?;
        let operation_name = request.operation_name.as_deref().unwrap_or("<anonymous>");
        debug!(
            service = %self.config.service_name,
            operation = operation_name,
            "issuing GraphQL request"
        );

        let bytes = self.send_once(&body).await?;
        let response: GraphqlResponse<R> = serde_json::from_slice(&bytes)?;

        if response.is_ok() {
            self.metrics
                .requests_success
                .fetch_add(1, Ordering::Relaxed);
        } else {
            self.metrics.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        Ok(response)
    }

    async fn send_once(&self, body: &serde_json::Value) -> Result<Vec<u8>, GraphqlClientError> {
        self.metrics.requests_total.fetch_add(1, Ordering::Relaxed);

        let mut builder = self.http.post(&self.endpoint).json(body);
        if let Some(token) = self.tokens.get() {
            builder = builder.bearer_auth(token.as_str());
        }
        let response = builder.send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.metrics
                .requests_unauthorized
                .fetch_add(1, Ordering::Relaxed);
            return Err(GraphqlClientError::Unauthorized {
                message: truncate_body(&bytes),
            });
        }
        if !status.is_success() {
            self.metrics.requests_error.fetch_add(1, Ordering::Relaxed);
            return Err(GraphqlClientError::HttpStatus {
                status,
                body: truncate_body(&bytes),
            });
        }

        Ok(bytes.to_vec())
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    const MAX_LEN: usize = 4096;
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_LEN {
        body.truncate(MAX_LEN);
        body.push('…');
    }
    body
}
