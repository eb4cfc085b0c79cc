//! The refresh-and-retry send path shared by both executors.

use tracing::debug;

use tlx_auth::{RefreshError, TokenRefresher};
use tlx_graphql::{GraphqlClient, GraphqlClientError, GraphqlOperation};

/// Terminal failure of one invocation.
pub(crate) enum ExecError {
    /// The operation itself failed (including an unauthorized retry leg).
    Graphql(GraphqlClientError),
    /// The credential renewal failed; the token has been cleared.
    Refresh(RefreshError),
}

impl ExecError {
    /// Consumer-facing message, falling back to the configured default when
    /// the server supplied an empty one.
    pub(crate) fn into_message(self, default_message: &str) -> String {
        let raw = match self {
            Self::Graphql(err) => err.message(),
            Self::Refresh(err) => err.to_string(),
        };
        if raw.is_empty() {
            default_message.to_string()
        } else {
            raw
        }
    }
}

/// Issue an operation, renewing the credential and re-issuing exactly once
/// if the first attempt is rejected as unauthorized.
///
/// The retry leg's outcome is final: a second rejection surfaces as the
/// invocation's error, never another refresh.
pub(crate) async fn send_with_refresh<O, F>(
    client: &GraphqlClient,
    refresher: &TokenRefresher,
    variables: O::Variables,
    mark_refreshing: F,
) -> Result<O::ResponseData, ExecError>
where
    O: GraphqlOperation,
    O::Variables: Clone,
    F: Fn(),
{
    match client.execute_strict::<O>(variables.clone()).await {
        Ok(data) => Ok(data),
        Err(err) if err.is_unauthorized() => {
            debug!(operation = O::OPERATION_NAME, "credential rejected, refreshing");
            mark_refreshing();
            match refresher.refresh().await {
                Ok(_) => client
                    .execute_strict::<O>(variables)
                    .await
                    .map_err(ExecError::Graphql),
                Err(refresh_err) => Err(ExecError::Refresh(refresh_err)),
            }
        }
        Err(err) => Err(ExecError::Graphql(err)),
    }
}
