//! Route guard applied before rendering a screen.

use crate::navigation::Navigator;
use crate::token::TokenStore;

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Landing path after login when no return path was recorded.
pub const DEFAULT_LANDING_PATH: &str = "/";

/// Routes reachable without a credential.
const PUBLIC_ROUTES: [&str; 3] = ["/login", "/resetpassword", "/requestresetpassword"];

/// Outcome of guarding one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// The requested path may render.
    Granted,
    /// No credential for a protected path; the return path was recorded
    /// and the navigator was sent to login.
    RedirectedToLogin,
    /// A credentialed visit to a public route; sent to the landing page.
    RedirectedToLanding,
}

/// Apply the route rules to a navigation attempt.
///
/// Mirrors the edge middleware: authenticated users skip the auth screens,
/// unauthenticated users are bounced to login with the attempted path
/// remembered for after they sign in.
pub fn guard_route(tokens: &TokenStore, navigator: &dyn Navigator, path: &str) -> RouteAccess {
    let is_public = PUBLIC_ROUTES
        .iter()
        .any(|route| path.starts_with(route));
    let has_token = tokens.get().is_some();

    if is_public && has_token {
        navigator.go_to(DEFAULT_LANDING_PATH);
        return RouteAccess::RedirectedToLanding;
    }
    if !is_public && !has_token {
        navigator.record_redirect(path);
        navigator.go_to_login();
        return RouteAccess::RedirectedToLogin;
    }
    RouteAccess::Granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RecordingNavigator;
    use crate::token::AccessToken;

    #[test]
    fn protected_route_without_token_records_redirect() {
        let tokens = TokenStore::new();
        let navigator = RecordingNavigator::new();

        let access = guard_route(&tokens, &navigator, "/schedule-tax");
        assert_eq!(access, RouteAccess::RedirectedToLogin);
        assert_eq!(navigator.login_visits(), 1);
        assert_eq!(navigator.take_redirect().as_deref(), Some("/schedule-tax"));
    }

    #[test]
    fn public_route_with_token_goes_home() {
        let tokens = TokenStore::new();
        tokens.set(AccessToken::new("t"));
        let navigator = RecordingNavigator::new();

        let access = guard_route(&tokens, &navigator, "/login");
        assert_eq!(access, RouteAccess::RedirectedToLanding);
        assert_eq!(navigator.last_visited().as_deref(), Some("/"));
    }

    #[test]
    fn protected_route_with_token_is_granted() {
        let tokens = TokenStore::new();
        tokens.set(AccessToken::new("t"));
        let navigator = RecordingNavigator::new();

        assert_eq!(
            guard_route(&tokens, &navigator, "/country"),
            RouteAccess::Granted
        );
        assert!(navigator.visited().is_empty());
    }
}
