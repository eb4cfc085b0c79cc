//! Country registry operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, PageVars};

/// Country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(rename = "_id")]
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub code: String,
}

/// Paged country listing.
pub struct CountryList;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryListData {
    pub country_list: Page<Country>,
}

impl GraphqlOperation for CountryList {
    type Variables = PageVars;
    type ResponseData = CountryListData;

    const QUERY: &'static str = "query CountryList($page: Int!) { countryList(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id nameEn nameAr code } } }";
    const OPERATION_NAME: &'static str = "CountryList";
}

/// Single-country lookup (used by the update modal to prefill its form).
pub struct CountryById;

#[derive(Debug, Clone, Deserialize)]
pub struct CountryByIdData {
    pub country: Country,
}

impl GraphqlOperation for CountryById {
    type Variables = IdVars;
    type ResponseData = CountryByIdData;

    const QUERY: &'static str =
        "query Country($id: ID!) { country(id: $id) { _id nameEn nameAr code } }";
    const OPERATION_NAME: &'static str = "Country";
}

/// New-country input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInput {
    pub name_en: String,
    pub name_ar: String,
    pub code: String,
}

/// Create a country.
pub struct CreateCountry;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryData {
    pub create_country: Country,
}

impl GraphqlOperation for CreateCountry {
    type Variables = CountryInput;
    type ResponseData = CreateCountryData;

    const QUERY: &'static str = "mutation CreateCountry($nameEn: String!, $nameAr: String!, $code: String!) { createCountry(createCountryInput: { nameEn: $nameEn, nameAr: $nameAr, code: $code }) { _id nameEn nameAr code } }";
    const OPERATION_NAME: &'static str = "CreateCountry";
}

/// Updated-country input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryInput {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryVars {
    pub update_country_input: UpdateCountryInput,
}

/// Update a country.
pub struct UpdateCountry;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryData {
    pub update_country: Country,
}

impl GraphqlOperation for UpdateCountry {
    type Variables = UpdateCountryVars;
    type ResponseData = UpdateCountryData;

    const QUERY: &'static str = "mutation UpdateCountry($updateCountryInput: UpdateCountryDTO!) { updateCountry(updateCountryInput: $updateCountryInput) { _id nameEn nameAr code } }";
    const OPERATION_NAME: &'static str = "UpdateCountry";
}

/// Delete a country.
pub struct DeleteCountry;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCountryData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_country: serde_json::Value,
}

impl GraphqlOperation for DeleteCountry {
    type Variables = IdVars;
    type ResponseData = DeleteCountryData;

    const QUERY: &'static str =
        "mutation DeleteCountry($id: String!) { deleteCountry(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteCountry";
}
