//! Generic query executor.

use std::sync::Arc;

use parking_lot::Mutex;

use tlx_auth::TokenRefresher;
use tlx_graphql::{GraphqlClient, GraphqlOperation};

use crate::retry::send_with_refresh;
use crate::state::{ExecutionPhase, ExecutionSnapshot, StateCell};

/// Error message shown when a query fails without a server message.
pub const DEFAULT_QUERY_ERROR_MESSAGE: &str = "An error occurred while fetching data";

type SuccessCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Generic read-operation executor.
///
/// Wraps one query with loading/error/success state, a `refetch` that
/// re-runs it (optionally with new variables), a `fetch_more` that merges a
/// further page into held data, and the refresh-and-retry path on
/// credential rejection.
///
/// Overlapping invocations are generation-numbered: only the newest may
/// write state, so a late resolution from a superseded call is discarded.
pub struct QueryExecutor<O: GraphqlOperation> {
    client: GraphqlClient,
    refresher: TokenRefresher,
    variables: Mutex<O::Variables>,
    on_success: Option<SuccessCallback<O::ResponseData>>,
    on_error: Option<ErrorCallback>,
    default_error_message: String,
    skip: bool,
    state: StateCell<O::ResponseData>,
}

impl<O> QueryExecutor<O>
where
    O: GraphqlOperation,
    O::Variables: Clone,
    O::ResponseData: Clone,
{
    /// Create an executor for one operation with its initial variables.
    #[must_use]
    pub fn new(client: GraphqlClient, refresher: TokenRefresher, variables: O::Variables) -> Self {
        Self {
            client,
            refresher,
            variables: Mutex::new(variables),
            on_success: None,
            on_error: None,
            default_error_message: DEFAULT_QUERY_ERROR_MESSAGE.to_string(),
            skip: false,
            state: StateCell::new(),
        }
    }

    /// Invoke the callback with the data of every successful invocation.
    #[must_use]
    pub fn on_success(mut self, callback: impl Fn(&O::ResponseData) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    /// Invoke the callback with the message of every settled error.
    #[must_use]
    pub fn on_error(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Override the fallback error message.
    #[must_use]
    pub fn with_default_error_message(mut self, message: impl Into<String>) -> Self {
        self.default_error_message = message.into();
        self
    }

    /// Skip the automatic invocation in [`QueryExecutor::start`].
    #[must_use]
    pub const fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Run the initial invocation, unless configured to skip it.
    pub async fn start(&self) -> ExecutionSnapshot<O::ResponseData> {
        if self.skip {
            return self.snapshot();
        }
        self.run(None).await
    }

    /// Re-run the operation, optionally with overridden variables.
    pub async fn refetch(
        &self,
        variables: Option<O::Variables>,
    ) -> ExecutionSnapshot<O::ResponseData> {
        self.run(variables).await
    }

    /// Fetch a further page and merge it into the held data.
    ///
    /// The merge closure receives the currently held data and the incoming
    /// response and produces the combined data to hold.
    pub async fn fetch_more<M>(
        &self,
        variables: O::Variables,
        merge: M,
    ) -> ExecutionSnapshot<O::ResponseData>
    where
        M: FnOnce(Option<O::ResponseData>, O::ResponseData) -> O::ResponseData,
    {
        let generation = self.state.next_generation();
        self.state.begin(generation);

        let outcome = send_with_refresh::<O, _>(&self.client, &self.refresher, variables, || {
            self.state.mark_refreshing(generation);
        })
        .await;

        match outcome {
            Ok(incoming) => {
                let merged = merge(self.state.data(), incoming);
                if self.state.settle_success(generation, merged.clone()) {
                    if let Some(callback) = &self.on_success {
                        callback(&merged);
                    }
                }
            }
            Err(err) => {
                let message = err.into_message(&self.default_error_message);
                if self.state.settle_error(generation, message.clone()) {
                    if let Some(callback) = &self.on_error {
                        callback(&message);
                    }
                }
            }
        }
        self.snapshot()
    }

    /// Clear the settled error/success outcome without re-issuing.
    pub fn reset(&self) {
        self.state.reset();
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ExecutionSnapshot<O::ResponseData> {
        self.state.snapshot()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ExecutionPhase {
        self.state.phase()
    }

    /// Data from the most recent successful invocation.
    #[must_use]
    pub fn data(&self) -> Option<O::ResponseData> {
        self.state.data()
    }

    async fn run(&self, overrides: Option<O::Variables>) -> ExecutionSnapshot<O::ResponseData> {
        if let Some(variables) = overrides {
            *self.variables.lock() = variables;
        }
        let variables = self.variables.lock().clone();

        let generation = self.state.next_generation();
        self.state.begin(generation);

        let outcome = send_with_refresh::<O, _>(&self.client, &self.refresher, variables, || {
            self.state.mark_refreshing(generation);
        })
        .await;

        match outcome {
            Ok(data) => {
                if self.state.settle_success(generation, data.clone()) {
                    if let Some(callback) = &self.on_success {
                        callback(&data);
                    }
                }
            }
            Err(err) => {
                let message = err.into_message(&self.default_error_message);
                if self.state.settle_error(generation, message.clone()) {
                    if let Some(callback) = &self.on_error {
                        callback(&message);
                    }
                }
            }
        }
        self.snapshot()
    }
}
