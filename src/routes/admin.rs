use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        banners::BannerList,
        products::{ProductList, ProductStats},
        top_offers::{TopOfferList, TopOfferRequest},
    },
    error::AppResult,
    middleware::auth::AdminSession,
    models::TopOffer,
    response::MessageResponse,
    routes::extract::{AppJson, AppPath},
    services::{banner_service, product_service, top_offer_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_all_products))
        .route("/stats", get(product_stats))
        .route("/banners", get(list_banners))
        .route("/top-offers", get(list_top_offers).post(create_top_offer))
        .route(
            "/top-offers/{id}",
            axum::routing::put(update_top_offer).delete(delete_top_offer),
        )
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    responses(
        (status = 200, description = "All products, any status", body = ProductList),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn list_all_products(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<ProductList>> {
    let resp = product_service::list_all_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Product counts, categories and tags", body = ProductStats),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn product_stats(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<ProductStats>> {
    let resp = product_service::product_stats(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/banners",
    responses(
        (status = 200, description = "All banners, newest first", body = BannerList),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn list_banners(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<BannerList>> {
    let resp = banner_service::list_banners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/top-offers",
    responses(
        (status = 200, description = "All top offers by sort order", body = TopOfferList),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn list_top_offers(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<TopOfferList>> {
    let resp = top_offer_service::list_all_offers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/top-offers",
    request_body = TopOfferRequest,
    responses(
        (status = 201, description = "Top offer created", body = TopOffer),
        (status = 400, description = "Title, image_url or link missing", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn create_top_offer(
    State(state): State<AppState>,
    admin: AdminSession,
    AppJson(payload): AppJson<TopOfferRequest>,
) -> AppResult<(StatusCode, Json<TopOffer>)> {
    let offer = top_offer_service::create_offer(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    put,
    path = "/api/admin/top-offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Top offer ID")
    ),
    request_body = TopOfferRequest,
    responses(
        (status = 200, description = "Top offer replaced", body = TopOffer),
        (status = 400, description = "Title, image_url or link missing", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Top offer not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn update_top_offer(
    State(state): State<AppState>,
    admin: AdminSession,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<TopOfferRequest>,
) -> AppResult<Json<TopOffer>> {
    let offer = top_offer_service::update_offer(&state, &admin, id, payload).await?;
    Ok(Json(offer))
}

#[utoipa::path(
    delete,
    path = "/api/admin/top-offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Top offer ID")
    ),
    responses(
        (status = 200, description = "Top offer deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Top offer not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn delete_top_offer(
    State(state): State<AppState>,
    admin: AdminSession,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let resp = top_offer_service::delete_offer(&state, &admin, id).await?;
    Ok(Json(resp))
}
