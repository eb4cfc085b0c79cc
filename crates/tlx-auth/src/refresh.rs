//! Token refresh procedure with single-flight coalescing.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::navigation::Navigator;
use crate::token::{AccessToken, TokenStore};

/// Refresh operation document.
///
/// The refresh credential itself is an httpOnly cookie, so the request
/// carries no variables.
pub const REFRESH_QUERY: &str = "query RefreshToken { refreshToken }";

/// Refresh errors.
#[derive(Debug, Clone, Error)]
pub enum RefreshError {
    /// Invalid refresher configuration.
    #[error("invalid refresh configuration: {0}")]
    InvalidConfig(String),

    /// The refresh call errored or returned no token.
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),
}

#[derive(Debug, Deserialize)]
struct RefreshData {
    #[serde(rename = "refreshToken")]
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RefreshPayload {
    #[serde(default)]
    data: Option<RefreshData>,
    #[serde(default)]
    errors: Vec<RefreshErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct RefreshErrorEntry {
    message: String,
}

type SharedRefresh = Shared<BoxFuture<'static, Result<AccessToken, RefreshError>>>;

struct RefresherInner {
    endpoint: String,
    http: reqwest::Client,
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    in_flight: Mutex<Option<SharedRefresh>>,
}

/// Exchanges the current credential for a fresh one.
///
/// Concurrent callers share a single in-flight refresh: a second
/// authorization failure arriving while a refresh is already running awaits
/// the same outcome instead of issuing another refresh call, so at most one
/// token value becomes authoritative per round.
#[derive(Clone)]
pub struct TokenRefresher {
    inner: Arc<RefresherInner>,
}

impl std::fmt::Debug for TokenRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRefresher")
            .field("endpoint", &self.inner.endpoint)
            .finish()
    }
}

impl TokenRefresher {
    /// Create a refresher with a default HTTP client (30 s timeout, cookies
    /// enabled for the httpOnly refresh credential).
    pub fn new(
        endpoint: impl Into<String>,
        tokens: TokenStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, RefreshError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()
            .map_err(|err| RefreshError::InvalidConfig(err.to_string()))?;
        Ok(Self::with_http_client(endpoint, http, tokens, navigator))
    }

    /// Create a refresher with a custom HTTP client.
    #[must_use]
    pub fn with_http_client(
        endpoint: impl Into<String>,
        http: reqwest::Client,
        tokens: TokenStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(RefresherInner {
                endpoint: endpoint.into(),
                http,
                tokens,
                navigator,
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Refresh the access token.
    ///
    /// On success the new token is persisted to the store before this
    /// returns. On failure the store is cleared, the navigator is sent to
    /// login exactly once, and callers must not reuse the old token.
    pub async fn refresh(&self) -> Result<AccessToken, RefreshError> {
        let shared = {
            let mut guard = self.inner.in_flight.lock();
            if let Some(existing) = guard.as_ref() {
                existing.clone()
            } else {
                let inner = Arc::clone(&self.inner);
                let future = async move { inner.refresh_once().await }.boxed().shared();
                *guard = Some(future.clone());
                future
            }
        };

        let result = shared.clone().await;

        let mut guard = self.inner.in_flight.lock();
        if guard.as_ref().is_some_and(|current| current.ptr_eq(&shared)) {
            *guard = None;
        }
        drop(guard);

        result
    }
}

impl RefresherInner {
    async fn refresh_once(self: Arc<Self>) -> Result<AccessToken, RefreshError> {
        match self.request_token().await {
            Ok(token) => {
                self.tokens.set(token.clone());
                debug!("access token refreshed");
                Ok(token)
            }
            Err(reason) => {
                warn!(%reason, "token refresh failed, clearing credential");
                self.tokens.clear();
                self.navigator.go_to_login();
                Err(RefreshError::RefreshFailed(reason))
            }
        }
    }

    async fn request_token(&self) -> Result<AccessToken, String> {
        let body = serde_json::json!({ "query": REFRESH_QUERY });
        let mut builder = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = self.tokens.get() {
            builder = builder.bearer_auth(token.as_str());
        }
        let response = builder.send().await.map_err(|err| err.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("refresh endpoint returned {status}"));
        }

        let payload: RefreshPayload = response.json().await.map_err(|err| err.to_string())?;
        if let Some(entry) = payload.errors.first() {
            return Err(entry.message.clone());
        }
        match payload.data.and_then(|data| data.refresh_token) {
            Some(raw) if !raw.is_empty() => Ok(AccessToken::new(raw)),
            _ => Err("refresh response carried no token".to_string()),
        }
    }
}
