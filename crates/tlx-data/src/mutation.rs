//! Generic mutation executor.

use std::sync::Arc;

use tlx_auth::TokenRefresher;
use tlx_graphql::{GraphqlClient, GraphqlOperation};

use crate::retry::send_with_refresh;
use crate::state::{ExecutionPhase, ExecutionSnapshot, StateCell};

/// Error message shown when a mutation fails without a server message.
pub const DEFAULT_MUTATION_ERROR_MESSAGE: &str = "An error occurred";

type SuccessCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Generic write-operation executor.
///
/// Never auto-invokes: callers trigger [`MutationExecutor::execute`]
/// explicitly (e.g. on form submit). Shares the query executor's
/// refresh-and-retry contract. `execute` returns `None` when the call
/// settles in an error path — callers treat `None` as "no result, check
/// `error`".
pub struct MutationExecutor<O: GraphqlOperation> {
    client: GraphqlClient,
    refresher: TokenRefresher,
    on_success: Option<SuccessCallback<O::ResponseData>>,
    on_error: Option<ErrorCallback>,
    default_error_message: String,
    state: StateCell<O::ResponseData>,
}

impl<O> MutationExecutor<O>
where
    O: GraphqlOperation,
    O::Variables: Clone,
    O::ResponseData: Clone,
{
    /// Create an executor for one mutation.
    #[must_use]
    pub fn new(client: GraphqlClient, refresher: TokenRefresher) -> Self {
        Self {
            client,
            refresher,
            on_success: None,
            on_error: None,
            default_error_message: DEFAULT_MUTATION_ERROR_MESSAGE.to_string(),
            state: StateCell::new(),
        }
    }

    /// Invoke the callback with the data of every successful call.
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

    /// Run the mutation with the given variables.
    ///
    /// `error` and `is_success` are reset at the start of every call, so a
    /// failure never leaves a stale success flag from an earlier call.
    pub async fn execute(&self, variables: O::Variables) -> Option<O::ResponseData> {
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
                Some(data)
            }
            Err(err) => {
                let message = err.into_message(&self.default_error_message);
                if self.state.settle_error(generation, message.clone()) {
                    if let Some(callback) = &self.on_error {
                        callback(&message);
                    }
                }
                None
            }
        }
    }

    /// Clear the settled error/success outcome.
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

    /// `true` while a call or refresh is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.phase().is_loading()
    }

    /// Message of the last settled error, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.snapshot().error
    }

    /// `true` if the last call settled successfully.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.state.phase() == ExecutionPhase::Success
    }
}
