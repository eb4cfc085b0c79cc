//! Measurement unit operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, PageVars, UserRef};

/// Measurement unit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(rename = "_id")]
    pub id: String,
    pub unit_name_en: String,
    pub unit_name_ar: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub updated_by: Option<UserRef>,
}

/// Paged measurement listing.
pub struct GetMeasurements;

#[derive(Debug, Clone, Deserialize)]
pub struct MeasurementsData {
    pub measurements: Page<Measurement>,
}

impl GraphqlOperation for GetMeasurements {
    type Variables = PageVars;
    type ResponseData = MeasurementsData;

    const QUERY: &'static str = "query GetMeasurements($page: Int!) { measurements(filter: { deleted: false }, pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id unitNameEn unitNameAr note createdAt updatedAt createdBy { firstName lastName email } updatedBy { firstName lastName email } } } }";
    const OPERATION_NAME: &'static str = "GetMeasurements";
}

/// New-measurement input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInput {
    pub unit_name_en: String,
    pub unit_name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementVars {
    pub create_measurement_input: MeasurementInput,
}

/// Create a measurement unit.
pub struct CreateMeasurement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_measurement: serde_json::Value,
}

impl GraphqlOperation for CreateMeasurement {
    type Variables = CreateMeasurementVars;
    type ResponseData = CreateMeasurementData;

    const QUERY: &'static str = "mutation CreateMeasurement($createMeasurementInput: CreateMeasurementInput!) { createMeasurement(createMeasurementInput: $createMeasurementInput) }";
    const OPERATION_NAME: &'static str = "CreateMeasurement";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeasurementVars {
    pub id: String,
    pub update_measurement_input: MeasurementInput,
}

/// Update a measurement unit.
pub struct UpdateMeasurement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeasurementData {
    /// Opaque acknowledgement returned by the resolver.
    pub update_measurement: serde_json::Value,
}

impl GraphqlOperation for UpdateMeasurement {
    type Variables = UpdateMeasurementVars;
    type ResponseData = UpdateMeasurementData;

    const QUERY: &'static str = "mutation UpdateMeasurement($id: String!, $updateMeasurementInput: UpdateMeasurementDTO!) { updateMeasurement(id: $id, updateMeasurementInput: $updateMeasurementInput) }";
    const OPERATION_NAME: &'static str = "UpdateMeasurement";
}

/// Assignment of chapters/sub-chapters/products to a measurement unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUnitsInput {
    pub measurement_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chapters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_chapters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUnitsVars {
    pub update_measurement_input: AddUnitsInput,
}

/// Attach chapters, sub-chapters or products to a measurement unit.
pub struct AddUnitsToMeasurement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUnitsData {
    /// Opaque acknowledgement returned by the resolver.
    pub add_units_to_measurement: serde_json::Value,
}

impl GraphqlOperation for AddUnitsToMeasurement {
    type Variables = AddUnitsVars;
    type ResponseData = AddUnitsData;

    const QUERY: &'static str = "mutation AddUnitsToMeasurement($updateMeasurementInput: addChapterOrSubChapterOrItemsToMeasurementInput!) { addUnitsToMeasurement(updateMeasurementInput: $updateMeasurementInput) }";
    const OPERATION_NAME: &'static str = "AddUnitsToMeasurement";
}

/// Delete a measurement unit.
pub struct DeleteMeasurement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMeasurementData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_measurement: serde_json::Value,
}

impl GraphqlOperation for DeleteMeasurement {
    type Variables = IdVars;
    type ResponseData = DeleteMeasurementData;

    const QUERY: &'static str =
        "mutation DeleteMeasurement($id: String!) { deleteMeasurement(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteMeasurement";
}
