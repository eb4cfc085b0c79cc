//! Login/logout flow.

use thiserror::Error;
use tracing::info;

use tlx_auth::{AccessToken, DEFAULT_LANDING_PATH};

use crate::context::ApiContext;
use crate::operations::auth::{Authenticate, Credentials};

/// Error message shown when login fails without a server message.
pub const DEFAULT_LOGIN_ERROR_MESSAGE: &str = "An error occurred during login";

/// Session errors.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Authentication was rejected or unreachable.
    #[error("{0}")]
    LoginFailed(String),
}

/// Login/logout flow over one context's wiring.
///
/// A rejected password is not an expired session, so login goes straight
/// through the transport client rather than the refresh-and-retry path.
pub struct Session {
    context: ApiContext,
}

impl Session {
    pub(crate) const fn new(context: ApiContext) -> Self {
        Self { context }
    }

    /// Authenticate, store the returned token, and navigate to the recorded
    /// return path (cleared on use) or the default landing page.
    pub async fn login(&self, email: &str, password: &str) -> Result<AccessToken, SessionError> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let data = self
            .context
            .client()
            .execute_strict::<Authenticate>(credentials)
            .await
            .map_err(|err| {
                let message = err.message();
                SessionError::LoginFailed(if message.is_empty() {
                    DEFAULT_LOGIN_ERROR_MESSAGE.to_string()
                } else {
                    message
                })
            })?;

        if data.authenticate.is_empty() {
            return Err(SessionError::LoginFailed(
                DEFAULT_LOGIN_ERROR_MESSAGE.to_string(),
            ));
        }

        let token = AccessToken::new(data.authenticate);
        self.context.tokens().set(token.clone());
        info!(email, "login succeeded");

        let target = self
            .context
            .navigator()
            .take_redirect()
            .unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string());
        self.context.navigator().go_to(&target);

        Ok(token)
    }

    /// Drop the credential and return to the login screen.
    pub fn logout(&self) {
        self.context.tokens().clear();
        self.context.navigator().go_to_login();
    }
}
