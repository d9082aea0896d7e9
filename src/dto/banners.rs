use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Banner;

/// Body of `GET /api/banner`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveBanner {
    pub banner: Option<Banner>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct BannerList {
    #[schema(value_type = Vec<Banner>)]
    pub items: Vec<Banner>,
}

/// An image taken from the `banner` field of a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// OpenAPI description of the upload form.
#[derive(ToSchema)]
pub struct BannerUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub banner: Vec<u8>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBanner {
    pub id: Uuid,
    pub filename: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BannerUploadResponse {
    pub message: String,
    pub banner: UploadedBanner,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BannerActionRequest {
    pub banner_id: Option<String>,
    /// `activate` or `reset`.
    pub action: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BannerIdRequest {
    pub banner_id: Option<String>,
}
