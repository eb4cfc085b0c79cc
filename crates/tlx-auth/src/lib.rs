//! TLX Auth - credential management for the back-office client.
//!
//! This crate provides:
//! - A process-wide access-token store with pluggable persistence and a
//!   change subscription.
//! - The token refresh procedure with single-flight coalescing of
//!   concurrent refresh attempts.
//! - The navigation seam used for login redirects, and the route guard
//!   applied before rendering protected screens.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod guard;
mod navigation;
mod refresh;
mod token;

pub use guard::{guard_route, RouteAccess, DEFAULT_LANDING_PATH, LOGIN_PATH};
pub use navigation::{Navigator, RecordingNavigator};
pub use refresh::{RefreshError, TokenRefresher, REFRESH_QUERY};
pub use token::{AccessToken, FileTokenPersistence, TokenPersistence, TokenStore};
