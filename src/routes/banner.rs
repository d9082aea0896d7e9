use axum::{
    Json, Router,
    extract::{
        DefaultBodyLimit, Multipart, State,
        multipart::MultipartRejection,
    },
    routing::get,
};

use crate::{
    dto::banners::{
        ActiveBanner, BannerActionRequest, BannerIdRequest, BannerUploadForm,
        BannerUploadResponse, UploadedImage,
    },
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    response::MessageResponse,
    routes::extract::AppJson,
    services::banner_service::{self, MAX_BANNER_BYTES},
    state::AppState,
};

/// Upload body limit: the image plus multipart framing.
pub const BANNER_BODY_LIMIT: usize = MAX_BANNER_BYTES + 1024 * 1024;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(active_banner)
                .post(upload_banner)
                .put(update_banner)
                .delete(delete_banner),
        )
        .layer(DefaultBodyLimit::max(BANNER_BODY_LIMIT))
}

#[utoipa::path(
    get,
    path = "/api/banner",
    responses(
        (status = 200, description = "Active banner or null", body = ActiveBanner),
        (status = 500, description = "Database error", body = MessageResponse)
    ),
    tag = "Banner"
)]
pub async fn active_banner(State(state): State<AppState>) -> AppResult<Json<ActiveBanner>> {
    let resp = banner_service::active_banner(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/banner",
    request_body(content = BannerUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Banner stored and activated", body = BannerUploadResponse),
        (status = 400, description = "Missing, empty, non-image or oversized file", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Banner"
)]
pub async fn upload_banner(
    State(state): State<AppState>,
    admin: AdminSession,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<BannerUploadResponse>> {
    let mut multipart = multipart.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.body_text()))?
    {
        if field.name() != Some("banner") {
            continue;
        }
        let filename = field.file_name().unwrap_or("banner").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(err.body_text()))?;
        upload = Some(UploadedImage {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let resp = banner_service::upload_banner(&state, &admin, upload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/banner",
    request_body = BannerActionRequest,
    responses(
        (status = 200, description = "Banner activated or banners reset", body = MessageResponse),
        (status = 400, description = "Unknown action or missing banner ID", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Banner not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Banner"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    admin: AdminSession,
    AppJson(payload): AppJson<BannerActionRequest>,
) -> AppResult<Json<MessageResponse>> {
    let resp = banner_service::update_banner(&state, &admin, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/banner",
    request_body = BannerIdRequest,
    responses(
        (status = 200, description = "Banner deleted", body = MessageResponse),
        (status = 400, description = "Missing banner ID", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Banner not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Banner"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    admin: AdminSession,
    AppJson(payload): AppJson<BannerIdRequest>,
) -> AppResult<Json<MessageResponse>> {
    let resp = banner_service::delete_banner(&state, &admin, payload).await?;
    Ok(Json(resp))
}
