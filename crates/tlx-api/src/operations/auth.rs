//! Authentication operations.

use serde::{Deserialize, Serialize};

use tlx_auth::REFRESH_QUERY;
use tlx_graphql::GraphqlOperation;

use super::NoVars;

/// Login credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login mutation; the payload is the signed access token.
pub struct Authenticate;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateData {
    pub authenticate: String,
}

impl GraphqlOperation for Authenticate {
    type Variables = Credentials;
    type ResponseData = AuthenticateData;

    const QUERY: &'static str = "mutation Authenticate($email: String!, $password: String!) { authenticate(authenticate: { email: $email, password: $password }) }";
    const OPERATION_NAME: &'static str = "Authenticate";
}

/// Session refresh; the refresh credential travels in an httpOnly cookie.
///
/// [`tlx_auth::TokenRefresher`] issues this document directly; the typed
/// operation exists for callers that want to drive a refresh through the
/// transport client themselves.
pub struct RefreshToken;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenData {
    pub refresh_token: String,
}

impl GraphqlOperation for RefreshToken {
    type Variables = NoVars;
    type ResponseData = RefreshTokenData;

    const QUERY: &'static str = REFRESH_QUERY;
    const OPERATION_NAME: &'static str = "RefreshToken";
}
