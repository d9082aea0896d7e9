use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::banners::{
        ActiveBanner, BannerActionRequest, BannerIdRequest, BannerList, BannerUploadResponse,
        UploadedBanner, UploadedImage,
    },
    dto::non_blank,
    entity::banners::{ActiveModel, Column, Entity as Banners},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::Banner,
    response::MessageResponse,
    state::AppState,
};

/// Largest accepted banner image.
pub const MAX_BANNER_BYTES: usize = 5 * 1024 * 1024;

/// The banner shown on the storefront, if any.
pub async fn active_banner(state: &AppState) -> AppResult<ActiveBanner> {
    let banner = Banners::find()
        .filter(Column::IsActive.eq(true))
        .order_by_desc(Column::CreatedAt)
        .one(&*state.orm)
        .await?
        .map(Banner::from);
    Ok(ActiveBanner { banner })
}

pub async fn list_banners(state: &AppState) -> AppResult<BannerList> {
    let items = Banners::find()
        .order_by_desc(Column::CreatedAt)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(Banner::from)
        .collect();
    Ok(BannerList { items })
}

/// Stores an uploaded image inline as a data URL and makes it the active banner.
pub async fn upload_banner(
    state: &AppState,
    admin: &AdminSession,
    upload: Option<UploadedImage>,
) -> AppResult<BannerUploadResponse> {
    let upload = validate_upload(upload)?;
    let data_url = to_data_url(&upload);

    // The new banner is inserted even when older ones could not be switched off.
    if let Err(err) = deactivate_all(state).await {
        tracing::warn!(error = %err, "failed to deactivate existing banners");
    }

    let banner = ActiveModel {
        id: Set(Uuid::new_v4()),
        image_url: Set(data_url),
        alt_text: Set(Some(upload.filename.clone())),
        is_active: Set(true),
        created_at: NotSet,
        updated_at: NotSet,
    }
    .insert(&*state.orm)
    .await?;

    tracing::info!(
        actor = %admin.username,
        banner_id = %banner.id,
        bytes = upload.bytes.len(),
        "banner uploaded"
    );

    Ok(BannerUploadResponse {
        message: "Banner uploaded".into(),
        banner: UploadedBanner {
            id: banner.id,
            filename: upload.filename,
            uploaded_at: banner.created_at.with_timezone(&Utc),
            is_active: banner.is_active,
        },
    })
}

/// `activate` switches every banner off and then the chosen one on, leaving
/// everything untouched when the chosen banner does not exist;
/// `reset` only switches every banner off.
pub async fn update_banner(
    state: &AppState,
    admin: &AdminSession,
    payload: BannerActionRequest,
) -> AppResult<MessageResponse> {
    match payload.action.as_deref() {
        Some("activate") => {
            let id = parse_banner_id(payload.banner_id)?;
            if Banners::find_by_id(id).one(&*state.orm).await?.is_none() {
                return Err(AppError::NotFound("Banner not found".into()));
            }

            // Two separate writes: concurrent activations can interleave.
            deactivate_all(state).await?;
            let result = Banners::update_many()
                .col_expr(Column::IsActive, Expr::value(true))
                .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
                .filter(Column::Id.eq(id))
                .exec(&*state.orm)
                .await?;
            if result.rows_affected == 0 {
                return Err(AppError::NotFound("Banner not found".into()));
            }

            tracing::info!(actor = %admin.username, banner_id = %id, "banner activated");
            Ok(MessageResponse::new("Banner activated"))
        }
        Some("reset") => {
            let count = deactivate_all(state).await?;
            tracing::info!(actor = %admin.username, deactivated = count, "banners reset");
            Ok(MessageResponse::new("Default banner restored"))
        }
        _ => Err(AppError::BadRequest("Invalid action".into())),
    }
}

pub async fn delete_banner(
    state: &AppState,
    admin: &AdminSession,
    payload: BannerIdRequest,
) -> AppResult<MessageResponse> {
    let id = parse_banner_id(payload.banner_id)?;
    let result = Banners::delete_by_id(id).exec(&*state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Banner not found".into()));
    }

    tracing::info!(actor = %admin.username, banner_id = %id, "banner deleted");
    Ok(MessageResponse::new("Banner deleted"))
}

pub fn validate_upload(upload: Option<UploadedImage>) -> AppResult<UploadedImage> {
    let upload = match upload {
        Some(u) if !u.bytes.is_empty() => u,
        _ => {
            return Err(AppError::BadRequest(
                "No file uploaded or file is empty".into(),
            ));
        }
    };
    if !upload.content_type.starts_with("image/") {
        return Err(AppError::BadRequest(
            "Only image files are allowed (JPG, PNG, GIF, WebP)".into(),
        ));
    }
    if upload.bytes.len() > MAX_BANNER_BYTES {
        return Err(AppError::BadRequest(
            "File is too large. Maximum size: 5MB".into(),
        ));
    }
    Ok(upload)
}

pub fn to_data_url(upload: &UploadedImage) -> String {
    format!(
        "data:{};base64,{}",
        upload.content_type,
        STANDARD.encode(&upload.bytes)
    )
}

async fn deactivate_all(state: &AppState) -> Result<u64, DbErr> {
    let result = Banners::update_many()
        .col_expr(Column::IsActive, Expr::value(false))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
        .filter(Column::IsActive.eq(true))
        .exec(&*state.orm)
        .await?;
    Ok(result.rows_affected)
}

fn parse_banner_id(raw: Option<String>) -> AppResult<Uuid> {
    let raw = non_blank(raw).ok_or_else(|| AppError::BadRequest("Banner ID is required".into()))?;
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest("Invalid banner ID".into()))
}
