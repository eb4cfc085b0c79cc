//! TLX Data - generic data-access executors.
//!
//! Wraps GraphQL operations with loading/error/success state and the
//! refresh-and-retry pattern: an operation that fails for a rejected
//! credential transparently renews the token and re-issues itself exactly
//! once before surfacing failure.
//!
//! Errors never cross the executor boundary as panics or `Err` returns to
//! consumers; they settle into the execution state as message strings so
//! rendering code can branch without exception handling.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod mutation;
mod query;
mod retry;
mod state;

pub use mutation::{MutationExecutor, DEFAULT_MUTATION_ERROR_MESSAGE};
pub use query::{QueryExecutor, DEFAULT_QUERY_ERROR_MESSAGE};
pub use state::{ExecutionPhase, ExecutionSnapshot};
