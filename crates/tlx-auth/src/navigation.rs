//! Navigation seam for auth-driven redirects.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::guard::LOGIN_PATH;

/// Host-provided navigation sink.
///
/// On unrecoverable authentication failure the client navigates to the
/// login entry point through this seam; the host decides whether that is a
/// full page load or an in-app route change. Client-side credential state
/// is cleared before `go_to_login` fires, so both are equivalent.
pub trait Navigator: Send + Sync {
    /// Navigate to the given path.
    fn go_to(&self, path: &str);

    /// Remember the path to return to after a successful login.
    fn record_redirect(&self, path: &str);

    /// Take and clear the recorded return path.
    fn take_redirect(&self) -> Option<String>;

    /// Navigate to the login entry point.
    fn go_to_login(&self) {
        self.go_to(LOGIN_PATH);
    }
}

/// Navigator that records navigations instead of performing them.
///
/// Used by tests and by embedding hosts that drive navigation themselves.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    login_visits: AtomicUsize,
    visited: Mutex<Vec<String>>,
    redirect_to: Mutex<Option<String>>,
}

impl RecordingNavigator {
    /// Create a new recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of navigations to the login entry point.
    #[must_use]
    pub fn login_visits(&self) -> usize {
        self.login_visits.load(Ordering::SeqCst)
    }

    /// All recorded navigations, in order.
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    /// The most recent navigation, if any.
    #[must_use]
    pub fn last_visited(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        if path == LOGIN_PATH {
            self.login_visits.fetch_add(1, Ordering::SeqCst);
        }
        self.visited.lock().push(path.to_string());
    }

    fn record_redirect(&self, path: &str) {
        *self.redirect_to.lock() = Some(path.to_string());
    }

    fn take_redirect(&self) -> Option<String> {
        self.redirect_to.lock().take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_login_visits() {
        let navigator = RecordingNavigator::new();
        navigator.go_to_login();
        navigator.go_to("/country");
        assert_eq!(navigator.login_visits(), 1);
        assert_eq!(navigator.visited(), vec!["/login", "/country"]);
    }

    #[test]
    fn redirect_slot_is_cleared_on_take() {
        let navigator = RecordingNavigator::new();
        assert!(navigator.take_redirect().is_none());

        navigator.record_redirect("/products");
        assert_eq!(navigator.take_redirect().as_deref(), Some("/products"));
        assert!(navigator.take_redirect().is_none());
    }
}
