//! Trade agreement operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::countries::Country;
use super::{IdVars, PageVars, UserRef};

/// Trade agreement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
    pub reduced_duty_rate: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Partner country of the agreement.
    #[serde(default)]
    pub country_id: Option<Country>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub updated_by: Option<UserRef>,
}

/// Paged agreement listing.
pub struct GetAgreements;

#[derive(Debug, Clone, Deserialize)]
pub struct AgreementListData {
    #[serde(rename = "AgreementList")]
    pub agreement_list: Page<Agreement>,
}

impl GraphqlOperation for GetAgreements {
    type Variables = PageVars;
    type ResponseData = AgreementListData;

    const QUERY: &'static str = "query GetAgreements($page: Int!) { AgreementList(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id name note reducedDutyRate createdAt updatedAt countryId { _id nameEn nameAr code } createdBy { _id firstName lastName email } updatedBy { _id firstName lastName email } } } }";
    const OPERATION_NAME: &'static str = "GetAgreements";
}

/// New-agreement input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub reduced_duty_rate: f64,
    /// Partner country id.
    pub country_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgreementVars {
    #[serde(rename = "createAgreementDTO")]
    pub create_agreement_dto: AgreementInput,
}

/// Create an agreement.
pub struct CreateAgreement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAgreementData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_agreement: serde_json::Value,
}

impl GraphqlOperation for CreateAgreement {
    type Variables = CreateAgreementVars;
    type ResponseData = CreateAgreementData;

    const QUERY: &'static str = "mutation CreateAgreement($createAgreementDTO: CreateAgreementDTO!) { createAgreement(createAgreementDTO: $createAgreementDTO) }";
    const OPERATION_NAME: &'static str = "CreateAgreement";
}

/// Updated-agreement input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgreementInput {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub reduced_duty_rate: f64,
    pub country_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgreementVars {
    #[serde(rename = "updateAgreementDTO")]
    pub update_agreement_dto: UpdateAgreementInput,
}

/// Update an agreement.
pub struct UpdateAgreement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAgreementData {
    /// Opaque acknowledgement returned by the resolver.
    pub update_agreement: serde_json::Value,
}

impl GraphqlOperation for UpdateAgreement {
    type Variables = UpdateAgreementVars;
    type ResponseData = UpdateAgreementData;

    const QUERY: &'static str = "mutation UpdateAgreement($updateAgreementDTO: UpdateAgreementDTO!) { updateAgreement(updateAgreementDTO: $updateAgreementDTO) }";
    const OPERATION_NAME: &'static str = "UpdateAgreement";
}

/// Delete an agreement.
pub struct DeleteAgreement;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAgreementData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_agreement: serde_json::Value,
}

impl GraphqlOperation for DeleteAgreement {
    type Variables = IdVars;
    type ResponseData = DeleteAgreementData;

    const QUERY: &'static str =
        "mutation DeleteAgreement($id: String!) { deleteAgreement(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteAgreement";
}
