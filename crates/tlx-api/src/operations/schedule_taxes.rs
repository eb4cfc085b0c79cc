//! Schedule tax operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::measurements::Measurement;
use super::{IdVars, PageVars};

/// Schedule tax record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTax {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Measurement unit this tax applies to.
    #[serde(default)]
    pub measurement_id: Option<Measurement>,
}

/// Paged schedule tax listing.
pub struct FindAllScheduleTaxies;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTaxListData {
    pub find_all_schedule_taxies: Page<ScheduleTax>,
}

impl GraphqlOperation for FindAllScheduleTaxies {
    type Variables = PageVars;
    type ResponseData = ScheduleTaxListData;

    const QUERY: &'static str = "query FindAllScheduleTaxies($page: Int!) { findAllScheduleTaxies(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id note deletedAt createdAt updatedAt measurementId { _id unitNameAr unitNameEn note } } } }";
    const OPERATION_NAME: &'static str = "FindAllScheduleTaxies";
}

/// New schedule tax input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTaxInput {
    /// Measurement unit id.
    pub measurement_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleTaxVars {
    pub create_schedule_tax_input: ScheduleTaxInput,
}

/// Create a schedule tax.
pub struct CreateScheduleTax;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleTaxData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_schedule_tax: serde_json::Value,
}

impl GraphqlOperation for CreateScheduleTax {
    type Variables = CreateScheduleTaxVars;
    type ResponseData = CreateScheduleTaxData;

    const QUERY: &'static str = "mutation CreateScheduleTax($createScheduleTaxInput: CreateScheduleTaxInput!) { createScheduleTax(createScheduleTaxInput: $createScheduleTaxInput) }";
    const OPERATION_NAME: &'static str = "CreateScheduleTax";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleTaxVars {
    pub id: String,
    pub update_schedule_tax_input: ScheduleTaxInput,
}

/// Update a schedule tax.
pub struct UpdateScheduleTax;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleTaxData {
    /// Opaque acknowledgement returned by the resolver.
    pub update_schedule_tax: serde_json::Value,
}

impl GraphqlOperation for UpdateScheduleTax {
    type Variables = UpdateScheduleTaxVars;
    type ResponseData = UpdateScheduleTaxData;

    const QUERY: &'static str = "mutation UpdateScheduleTax($id: ID!, $updateScheduleTaxInput: UpdateScheduleTaxInput!) { updateScheduleTax(id: $id, updateScheduleTaxInput: $updateScheduleTaxInput) }";
    const OPERATION_NAME: &'static str = "UpdateScheduleTax";
}

/// Delete a schedule tax.
pub struct DeleteScheduleTax;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteScheduleTaxData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_schedule_tax: serde_json::Value,
}

impl GraphqlOperation for DeleteScheduleTax {
    type Variables = IdVars;
    type ResponseData = DeleteScheduleTaxData;

    const QUERY: &'static str =
        "mutation DeleteScheduleTax($id: ID!) { deleteScheduleTax(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteScheduleTax";
}
