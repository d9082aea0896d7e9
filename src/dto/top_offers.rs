use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TopOffer;

/// Create or replace a top offer. Field names match the stored columns.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
pub struct TopOfferRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TopOfferList {
    #[schema(value_type = Vec<TopOffer>)]
    pub items: Vec<TopOffer>,
}
