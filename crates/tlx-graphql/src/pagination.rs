//! Pagination types for the API's offset-paged lists.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GraphqlClientError;

/// One page of a paginated listing, in the API's wire shape.
///
/// Pages are numbered from 1; `data` holds the records of this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Total records across all pages. Zero when the query skipped it.
    #[serde(default)]
    pub total_size: u64,
    /// Total page count. Zero when the query skipped it.
    #[serde(default)]
    pub total_pages: u64,
    /// Records per page.
    #[serde(default)]
    pub page_size: u64,
    /// This page's 1-based number.
    #[serde(default)]
    pub page_number: u64,
    /// Records in this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if a further page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages
    }
}

/// Page limit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit {
    /// Maximum number of items to fetch.
    pub max_items: usize,
}

impl PageLimit {
    /// Create a new limit.
    #[must_use]
    pub const fn new(max_items: usize) -> Self {
        Self { max_items }
    }
}

/// Pagination error type.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// Underlying client error.
    #[error("pagination fetch failed: {0}")]
    Client(#[from] GraphqlClientError),

    /// Pagination limit exceeded.
    #[error("pagination limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Walk a paged listing from `start_page` and collect all records.
pub async fn paginate_pages<T, F, Fut>(
    start_page: u64,
    limit: Option<PageLimit>,
    mut fetch_page: F,
) -> Result<Vec<T>, PaginationError>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Page<T>, GraphqlClientError>>,
{
    let mut out = Vec::new();
    let mut page_number = start_page.max(1);
    loop {
        let page = fetch_page(page_number).await?;
        // an empty page with pages still advertised would loop forever
        let exhausted = page.data.is_empty() || !page.has_next_page();
        let remaining = limit.map(|limit| limit.max_items.saturating_sub(out.len()));
        if let Some(remaining) = remaining {
            if remaining == 0 {
                return Err(PaginationError::LimitExceeded(
                    "page limit reached".to_string(),
                ));
            }
            out.extend(page.data.into_iter().take(remaining));
        } else {
            out.extend(page.data);
        }

        if exhausted {
            break;
        }
        page_number += 1;
    }

    Ok(out)
}
