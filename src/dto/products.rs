use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

use super::double_option;

/// Add a product by ASIN; the rest comes from the catalog.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub amazon_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualProductRequest {
    pub amazon_id: Option<String>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub original_price: Option<Option<String>>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub discount: Option<Option<i32>>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_count: Option<i32>,
}

/// Overview numbers for the admin dashboard.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductStats {
    pub total: usize,
    pub active: usize,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}
