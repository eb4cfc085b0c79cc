//! Error types for the GraphQL transport.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server message markers that indicate a rejected or expired credential.
///
/// The API reports expiry through the error message body; `extensions.code`
/// is only present on newer resolvers.
const UNAUTHORIZED_MARKERS: [&str; 3] = ["jwt expired", "invalid token", "Unauthorized"];

/// HTTP error information captured from reqwest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    /// Error message.
    pub message: String,
    /// HTTP status code (if available).
    pub status_code: Option<u16>,
    /// Whether the error was a timeout.
    pub is_timeout: bool,
    /// Whether the error was a connection failure.
    pub is_connect: bool,
}

impl From<reqwest::Error> for HttpErrorInfo {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status().map(|status| status.as_u16()),
            is_timeout: err.is_timeout(),
            is_connect: err.is_connect(),
        }
    }
}

/// GraphQL error (per GraphQL spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Extensions metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlError {
    /// Returns `true` if this error reports a rejected or expired credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        let code = self
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(serde_json::Value::as_str);
        if matches!(code, Some("UNAUTHENTICATED" | "FORBIDDEN")) {
            return true;
        }
        UNAUTHORIZED_MARKERS
            .iter()
            .any(|marker| self.message.contains(marker))
    }
}

/// Error type for GraphQL client operations.
#[derive(Debug, Clone, Error)]
pub enum GraphqlClientError {
    /// The server rejected the current credential.
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Message reported by the server.
        message: String,
    },

    /// Server- or validation-reported operation error.
    #[error("operation error: {message}")]
    Operation {
        /// Message reported by the server.
        message: String,
    },

    /// Network-level failure with no usable response.
    #[error("transport error: {0:?}")]
    Transport(HttpErrorInfo),

    /// Non-success HTTP status outside the unauthorized class.
    #[error("HTTP status {status} with body: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: StatusCode,
        /// Response body (truncated if needed).
        body: String,
    },

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// Well-formed response that violates the GraphQL contract.
    #[error("GraphQL protocol error: {message}")]
    Protocol {
        /// Details.
        message: String,
    },
}

impl From<reqwest::Error> for GraphqlClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(HttpErrorInfo::from(err))
    }
}

impl From<serde_json::Error> for GraphqlClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl GraphqlClientError {
    /// Returns `true` if the refresh-and-retry path applies.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Consumer-facing message. May be empty when the server supplied none;
    /// callers substitute their configured default in that case.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized { message }
            | Self::Operation { message }
            | Self::Protocol { message } => message.clone(),
            Self::Transport(info) => info.message.clone(),
            Self::HttpStatus { status, body } => {
                if body.is_empty() {
                    format!("HTTP status {status}")
                } else {
                    body.clone()
                }
            }
            Self::Json(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_with_message(message: &str) -> GraphqlError {
        GraphqlError {
            message: message.to_string(),
            extensions: None,
        }
    }

    #[test]
    fn marker_messages_classify_as_unauthorized() {
        assert!(error_with_message("jwt expired").is_unauthorized());
        assert!(error_with_message("Context error: invalid token").is_unauthorized());
        assert!(error_with_message("Unauthorized").is_unauthorized());
        assert!(!error_with_message("country name already exists").is_unauthorized());
    }

    #[test]
    fn extensions_code_classifies_as_unauthorized() {
        let err = GraphqlError {
            message: "access denied".to_string(),
            extensions: Some(serde_json::json!({"code": "UNAUTHENTICATED"})),
        };
        assert!(err.is_unauthorized());

        let err = GraphqlError {
            message: "bad input".to_string(),
            extensions: Some(serde_json::json!({"code": "BAD_USER_INPUT"})),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn message_preserves_empty_server_messages() {
        let err = GraphqlClientError::Operation {
            message: String::new(),
        };
        assert!(err.message().is_empty());
    }
}
