//! Product catalogue operations.

use serde::{Deserialize, Serialize};

use tlx_graphql::{GraphqlOperation, Page};

use super::{IdVars, PageVars};

/// Measurement unit reference selected on product rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementUnitRef {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub unit_name: Option<String>,
    pub note: Option<String>,
}

/// Product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    /// Harmonized-system code.
    #[serde(rename = "HSCode")]
    pub hs_code: String,
    pub name_en: String,
    pub name_ar: String,
    #[serde(default)]
    pub note: Option<String>,
    pub default_duty_rate: f64,
    pub service_tax: f64,
    #[serde(rename = "adVAT")]
    pub ad_vat: f64,
    #[serde(default)]
    pub measurement_unit: Option<MeasurementUnitRef>,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Paged product listing.
pub struct AllProducts;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsData {
    pub all_products: Page<Product>,
}

impl GraphqlOperation for AllProducts {
    type Variables = PageVars;
    type ResponseData = ProductsData;

    const QUERY: &'static str = "query GetProducts($page: Int!) { allProducts(pageable: { page: $page }) { totalSize totalPages pageSize pageNumber data { _id HSCode nameEn nameAr note defaultDutyRate serviceTax adVAT measurementUnit { _id unitName note } } } }";
    const OPERATION_NAME: &'static str = "GetProducts";
}

/// New-product input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(rename = "HSCode")]
    pub hs_code: String,
    pub name_en: String,
    pub name_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub default_duty_rate: f64,
    pub service_tax: f64,
    #[serde(rename = "adVAT")]
    pub ad_vat: f64,
    /// Measurement unit id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductVars {
    pub create_product_input: ProductInput,
}

/// Create a product.
pub struct CreateProduct;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductData {
    /// Opaque acknowledgement returned by the resolver.
    pub create_product: serde_json::Value,
}

impl GraphqlOperation for CreateProduct {
    type Variables = CreateProductVars;
    type ResponseData = CreateProductData;

    const QUERY: &'static str = "mutation CreateProduct($createProductInput: CreateProductInput!) { createProduct(createProductInput: $createProductInput) }";
    const OPERATION_NAME: &'static str = "CreateProduct";
}

/// Updated-product input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductVars {
    pub id: String,
    pub update_product_input: ProductInput,
}

/// Update a product.
pub struct UpdateProduct;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductData {
    /// Opaque acknowledgement returned by the resolver.
    pub update_product: serde_json::Value,
}

impl GraphqlOperation for UpdateProduct {
    type Variables = UpdateProductVars;
    type ResponseData = UpdateProductData;

    const QUERY: &'static str = "mutation UpdateProduct($id: String!, $updateProductInput: UpdateProductInput!) { updateProduct(id: $id, updateProductInput: $updateProductInput) }";
    const OPERATION_NAME: &'static str = "UpdateProduct";
}

/// Delete a product; returns the removed record with its deletion stamp.
pub struct DeleteProduct;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductData {
    pub delete_product: Product,
}

impl GraphqlOperation for DeleteProduct {
    type Variables = IdVars;
    type ResponseData = DeleteProductData;

    const QUERY: &'static str = "mutation DeleteProduct($id: String!) { deleteProduct(id: $id) { _id HSCode nameEn nameAr note defaultDutyRate serviceTax adVAT deletedAt createdAt updatedAt } }";
    const OPERATION_NAME: &'static str = "DeleteProduct";
}
