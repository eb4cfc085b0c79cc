//! TLX GraphQL - transport client for the back-office API.
//!
//! This crate provides:
//! - A typed GraphQL HTTP client with per-request bearer authorization
//!   sourced from an injected token store.
//! - A typed error taxonomy that classifies authorization failures at the
//!   transport boundary.
//! - Page types and pagination helpers for the API's offset-paged lists.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod client;
mod error;
mod operation;
mod pagination;

pub use client::{
    GraphqlClient, GraphqlClientBuilder, GraphqlClientConfig, GraphqlClientMetrics,
    GraphqlClientMetricsSnapshot,
};
pub use error::{GraphqlClientError, GraphqlError, HttpErrorInfo};
pub use operation::{GraphqlOperation, GraphqlRequest, GraphqlResponse};
pub use pagination::{Page, PageLimit, PaginationError, paginate_pages};
