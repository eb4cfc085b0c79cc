//! Shared wiring for one back-office session.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use tlx_auth::{
    guard_route, FileTokenPersistence, Navigator, RefreshError, RouteAccess, TokenPersistence,
    TokenRefresher, TokenStore,
};
use tlx_data::{MutationExecutor, QueryExecutor};
use tlx_graphql::{GraphqlClient, GraphqlClientBuilder, GraphqlClientError, GraphqlOperation};

use crate::session::Session;

/// Wiring errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport client construction failed.
    #[error("client configuration failed: {0}")]
    Client(#[from] GraphqlClientError),

    /// Refresher construction failed.
    #[error("refresher configuration failed: {0}")]
    Refresh(#[from] RefreshError),
}

/// Configuration for one back-office API context.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Service name used in log lines.
    pub service_name: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Where to persist the access token across restarts, if anywhere.
    pub token_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Create a configuration for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            service_name: "tlx-backoffice".to_string(),
            timeout: Duration::from_secs(30),
            token_file: None,
        }
    }

    /// Set the service name used in log lines.
    #[must_use]
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Persist the access token to the given file across restarts.
    #[must_use]
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }
}

/// One back-office session's shared wiring: a token store, the transport
/// client reading it per request, and the refresher writing it.
///
/// Cheap to clone; clones share the same token store and refresher.
#[derive(Clone)]
pub struct ApiContext {
    tokens: TokenStore,
    client: GraphqlClient,
    refresher: TokenRefresher,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for ApiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiContext")
            .field("endpoint", &self.client.endpoint())
            .finish()
    }
}

impl ApiContext {
    /// Wire up a context from configuration and a navigation sink.
    pub fn new(config: ApiConfig, navigator: Arc<dyn Navigator>) -> Result<Self, ApiError> {
        let backends: Vec<Box<dyn TokenPersistence>> = config
            .token_file
            .as_ref()
            .map(|path| Box::new(FileTokenPersistence::new(path)) as Box<dyn TokenPersistence>)
            .into_iter()
            .collect();
        let tokens = TokenStore::with_persistence(backends);

        let client = GraphqlClientBuilder::new(config.endpoint.clone())
            .with_service_name(config.service_name.clone())
            .with_timeout(config.timeout)
            .build(tokens.clone())?;
        let refresher = TokenRefresher::new(config.endpoint, tokens.clone(), navigator.clone())?;

        Ok(Self {
            tokens,
            client,
            refresher,
            navigator,
        })
    }

    /// The shared token store.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// The transport client.
    #[must_use]
    pub const fn client(&self) -> &GraphqlClient {
        &self.client
    }

    /// The token refresher.
    #[must_use]
    pub const fn refresher(&self) -> &TokenRefresher {
        &self.refresher
    }

    /// The navigation sink.
    #[must_use]
    pub const fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Build a query executor for one operation.
    #[must_use]
    pub fn query<O>(&self, variables: O::Variables) -> QueryExecutor<O>
    where
        O: GraphqlOperation,
        O::Variables: Clone,
        O::ResponseData: Clone,
    {
        QueryExecutor::new(self.client.clone(), self.refresher.clone(), variables)
    }

    /// Build a mutation executor for one operation.
    #[must_use]
    pub fn mutation<O>(&self) -> MutationExecutor<O>
    where
        O: GraphqlOperation,
        O::Variables: Clone,
        O::ResponseData: Clone,
    {
        MutationExecutor::new(self.client.clone(), self.refresher.clone())
    }

    /// Apply the route rules to a navigation attempt.
    #[must_use]
    pub fn guard(&self, path: &str) -> RouteAccess {
        guard_route(&self.tokens, self.navigator.as_ref(), path)
    }

    /// The login/logout flow over this wiring.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.clone())
    }
}
