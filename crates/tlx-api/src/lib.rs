//! TLX API - typed operations and wiring for the back-office screens.
//!
//! Every screen follows the same shape: a paged listing query rendered into
//! a table, and create/update/delete mutations behind modals. This crate
//! defines those operations with the server's documents and field shapes,
//! plus the session (login/logout) flow and the `ApiContext` that wires the
//! token store, transport client and refresher together.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod context;
pub mod operations;
mod session;

pub use context::{ApiConfig, ApiContext, ApiError};
pub use session::{Session, SessionError, DEFAULT_LOGIN_ERROR_MESSAGE};
