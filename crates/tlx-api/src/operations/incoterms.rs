//! Incoterm operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, PageVars, UserRef};

/// Incoterm record with its cost-responsibility flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incoterm {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub insurance: bool,
    pub internal_unloading: bool,
    pub external_unloading: bool,
    pub internal_freight: bool,
    pub external_freight: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub updated_by: Option<UserRef>,
}

/// Paged incoterm listing (soft-deleted rows excluded).
pub struct AllIncoterms;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncotermsData {
    pub all_incoterms: Page<Incoterm>,
}

impl GraphqlOperation for AllIncoterms {
    type Variables = PageVars;
    type ResponseData = IncotermsData;

    const QUERY: &'static str = "query AllIncoterms($page: Int!) { allIncoterms(filter: { deleted: false }, pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id name code createdAt updatedAt insurance internalUnloading externalUnloading internalFreight externalFreight updatedBy { _id firstName lastName email } createdBy { _id firstName lastName email } } } }";
    const OPERATION_NAME: &'static str = "AllIncoterms";
}

/// New-incoterm input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncotermInput {
    pub name: String,
    pub code: String,
    pub insurance: bool,
    pub internal_unloading: bool,
    pub external_unloading: bool,
    pub internal_freight: bool,
    pub external_freight: bool,
}

/// The server's variable name is capitalized on this one mutation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateIncotermVars {
    #[serde(rename = "CreateIncotermInput")]
    pub create_incoterm_input: IncotermInput,
}

/// Create an incoterm.
pub struct CreateIncoterm;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncotermData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_incoterm: serde_json::Value,
}

impl GraphqlOperation for CreateIncoterm {
    type Variables = CreateIncotermVars;
    type ResponseData = CreateIncotermData;

    const QUERY: &'static str = "mutation CreateIncoterm($CreateIncotermInput: CreateIncotermDTO!) { createIncoterm(CreateIncotermInput: $CreateIncotermInput) }";
    const OPERATION_NAME: &'static str = "CreateIncoterm";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncotermVars {
    pub id: String,
    pub update_incoterm_input: IncotermInput,
}

/// Update an incoterm.
pub struct UpdateIncoterm;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncotermData {
    /// Opaque acknowledgement returned by the resolver.
    pub update_incoterm: serde_json::Value,
}

impl GraphqlOperation for UpdateIncoterm {
    type Variables = UpdateIncotermVars;
    type ResponseData = UpdateIncotermData;

    const QUERY: &'static str = "mutation UpdateIncoterm($id: ID!, $updateIncotermInput: UpdateIncotermDTO!) { updateIncoterm(id: $id, updateIncotermInput: $updateIncotermInput) }";
    const OPERATION_NAME: &'static str = "UpdateIncoterm";
}

/// Reference to a soft-deleted record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletedRef {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Soft-delete an incoterm; it disappears from the filtered listing.
pub struct SoftDeleteIncoterm;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeleteIncotermData {
    pub soft_delete_incoterm: DeletedRef,
}

impl GraphqlOperation for SoftDeleteIncoterm {
    type Variables = IdVars;
    type ResponseData = SoftDeleteIncotermData;

    const QUERY: &'static str =
        "mutation SoftDeleteIncoterm($id: ID!) { softDeleteIncoterm(id: $id) { _id } }";
    const OPERATION_NAME: &'static str = "SoftDeleteIncoterm";
}
