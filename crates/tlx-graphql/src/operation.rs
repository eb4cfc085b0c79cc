//! Operation types and the typed GraphQL trait.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GraphqlClientError, GraphqlError};

/// Typed GraphQL operation definition.
///
/// Implement this trait for each query/mutation.
pub trait GraphqlOperation {
    /// Variables type.
    type Variables: Serialize + Send + Sync;
    /// Response data type.
    type ResponseData: DeserializeOwned + Send + Sync;

    /// GraphQL query text.
    const QUERY: &'static str;
    /// Operation name (used for observability and request bodies).
    const OPERATION_NAME: &'static str;
}

/// GraphQL request payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    /// Query text.
    pub query: String,
    /// Variables.
    pub variables: V,
    /// Optional operation name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl<V> GraphqlRequest<V> {
    /// Create a new request.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: V) -> Self {
        Self {
            query: query.into(),
            variables,
            operation_name: None,
        }
    }

    /// Attach an operation name.
    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// GraphQL response container.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    /// Response data.
    #[serde(default)]
    pub data: Option<T>,
    /// GraphQL errors.
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Returns `true` if no GraphQL errors were returned.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into data, classifying any reported errors.
    ///
    /// An error list containing a credential rejection wins over other
    /// errors so the refresh-and-retry path always sees it.
    pub fn into_result(self) -> Result<T, GraphqlClientError> {
        if let Some(first) = self.errors.first() {
            let message = self
                .errors
                .iter()
                .find(|err| err.is_unauthorized())
                .map_or_else(|| first.message.clone(), |err| err.message.clone());
            if self.errors.iter().any(GraphqlError::is_unauthorized) {
                return Err(GraphqlClientError::Unauthorized { message });
            }
            return Err(GraphqlClientError::Operation { message });
        }
        self.data.ok_or_else(|| GraphqlClientError::Protocol {
            message: "missing GraphQL data".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_returns_data() {
        let response: GraphqlResponse<serde_json::Value> = GraphqlResponse {
            data: Some(serde_json::json!({"ok": true})),
            errors: vec![],
        };
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn into_result_prefers_unauthorized_over_other_errors() {
        let response: GraphqlResponse<serde_json::Value> = GraphqlResponse {
            data: None,
            errors: vec![
                GraphqlError {
                    message: "field resolution failed".to_string(),
                    extensions: None,
                },
                GraphqlError {
                    message: "jwt expired".to_string(),
                    extensions: None,
                },
            ],
        };
        let err = response.into_result().unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message(), "jwt expired");
    }

    #[test]
    fn into_result_missing_data_is_protocol_error() {
        let response: GraphqlResponse<serde_json::Value> = GraphqlResponse {
            data: None,
            errors: vec![],
        };
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, GraphqlClientError::Protocol { .. }));
    }
}
