//! Typed GraphQL operations for the back-office screens, grouped per entity.

use serde::{Deserialize, Serialize};

pub mod agreements;
pub mod auth;
pub mod chapters;
pub mod countries;
pub mod incoterms;
pub mod measurements;
pub mod partners;
pub mod products;
pub mod schedule_taxes;
pub mod shipping_ports;

/// Page selector for the paged listings (pages are 1-based).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageVars {
    /// Requested page number.
    pub page: u64,
}

/// Single-record selector with a string id.
#[derive(Debug, Clone, Serialize)]
pub struct IdVars {
    /// Record id.
    pub id: String,
}

/// Single-record selector with a numeric id.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NumericIdVars {
    /// Record id.
    pub id: i64,
}

/// Operation with no variables.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVars {}

/// Audit reference to the back-office user who touched a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRef {
    /// Record id, when selected.
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}
