//! Partner registration approval operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{NumericIdVars, PageVars};

/// Pending partner registration.
///
/// The listing aliases `_id` to `id` on the wire, so no rename is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    /// Registration type (importer, exporter, broker, …).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Paged registration listing.
pub struct GetAllRegistrations;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationListData {
    pub get_all_registrations: Page<Registration>,
}

impl GraphqlOperation for GetAllRegistrations {
    type Variables = PageVars;
    type ResponseData = RegistrationListData;

    const QUERY: &'static str = "query GetAllRegistrations($page: Int!) { getAllRegistrations(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { id: _id firstName lastName email companyName phone type } } }";
    const OPERATION_NAME: &'static str = "GetAllRegistrations";
}

/// Approve a pending registration.
pub struct ApproveRegistration;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRegistrationData {
    /// Opaque acknowledgement returned by the resolver.
    pub approve_registration: serde_json::Value,
}

impl GraphqlOperation for ApproveRegistration {
    type Variables = NumericIdVars;
    type ResponseData = ApproveRegistrationData;

    const QUERY: &'static str =
        "mutation ApproveRegistration($id: Int!) { approveRegistration(id: $id) }";
    const OPERATION_NAME: &'static str = "ApproveRegistration";
}

/// Reject and remove a pending registration.
pub struct DeleteRegistration;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRegistrationData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_registration: serde_json::Value,
}

impl GraphqlOperation for DeleteRegistration {
    type Variables = NumericIdVars;
    type ResponseData = DeleteRegistrationData;

    const QUERY: &'static str =
        "mutation DeleteRegistration($id: Int!) { deleteRegistration(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteRegistration";
}

/// Message sent to the applicant on their registration thread.
#[derive(Debug, Clone, Serialize)]
pub struct MessageVars {
    pub id: i64,
    pub message: String,
}

/// Post a message on a registration thread.
pub struct MessageOnRegistration;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOnRegistrationData {
    /// Opaque acknowledgement returned by the resolver.
    pub message_on_registration: serde_json::Value,
}

impl GraphqlOperation for MessageOnRegistration {
    type Variables = MessageVars;
    type ResponseData = MessageOnRegistrationData;

    const QUERY: &'static str = "mutation MessageOnRegistration($id: Int!, $message: String!) { messageOnRegistration(id: $id, message: $message) }";
    const OPERATION_NAME: &'static str = "MessageOnRegistration";
}
