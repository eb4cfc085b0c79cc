//! Shipping port operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, PageVars, UserRef};

/// Shipping port record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPort {
    #[serde(rename = "_id")]
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    /// Port code.
    pub port: String,
    #[serde(default)]
    pub created_by: Option<UserRef>,
}

/// Paged shipping port listing (soft-deleted rows excluded).
pub struct GetShippingPorts;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPortListData {
    pub get_shipping_port_list: Page<ShippingPort>,
}

impl GraphqlOperation for GetShippingPorts {
    type Variables = PageVars;
    type ResponseData = ShippingPortListData;

    const QUERY: &'static str = "query GetShippingPorts($page: Int!) { getShippingPortList(pageable: { page: $page } extraFilter: { deleted: false }) { totalSize totalPages pageSize pageNumber data { _id nameEn nameAr port createdBy { _id firstName lastName email } } } }";
    const OPERATION_NAME: &'static str = "GetShippingPorts";
}

/// New-port input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPortInput {
    pub name_en: String,
    pub name_ar: String,
    pub port: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShippingPortVars {
    pub create_shipping_port_input: ShippingPortInput,
}

/// Create a shipping port.
pub struct CreateShippingPort;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShippingPortData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_shipping_port: serde_json::Value,
}

impl GraphqlOperation for CreateShippingPort {
    type Variables = CreateShippingPortVars;
    type ResponseData = CreateShippingPortData;

    const QUERY: &'static str = "mutation CreateShippingPort($createShippingPortInput: CreateShippingPortDTO!) { createShippingPort(createShippingPortInput: $createShippingPortInput) }";
    const OPERATION_NAME: &'static str = "CreateShippingPort";
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShippingPortVars {
    pub id: String,
    pub update_shipping_port_input: ShippingPortInput,
}

/// Update a shipping port.
pub struct UpdateShippingPort;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShippingPortData {
    pub update_shipping_port: ShippingPort,
}

impl GraphqlOperation for UpdateShippingPort {
    type Variables = UpdateShippingPortVars;
    type ResponseData = UpdateShippingPortData;

    const QUERY: &'static str = "mutation UpdateShippingPort($id: ID!, $updateShippingPortInput: UpdateShippingPortDTO!) { updateShippingPort(id: $id, updateShippingPortInput: $updateShippingPortInput) { _id nameEn nameAr port } }";
    const OPERATION_NAME: &'static str = "UpdateShippingPort";
}

/// Delete a shipping port.
pub struct DeleteShippingPort;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteShippingPortData {
    /// Opaque acknowledgement returned by the resolver.
    pub delete_shipping_port: serde_json::Value,
}

impl GraphqlOperation for DeleteShippingPort {
    type Variables = IdVars;
    type ResponseData = DeleteShippingPortData;

    const QUERY: &'static str =
        "mutation DeleteShippingPort($id: ID!) { deleteShippingPort(id: $id) }";
    const OPERATION_NAME: &'static str = "DeleteShippingPort";
}
