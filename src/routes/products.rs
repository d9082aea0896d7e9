use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::products::{
        ClickResponse, CreateProductRequest, ManualProductRequest, ProductList,
        UpdateProductRequest,
    },
    error::AppResult,
    middleware::auth::AdminSession,
    models::Product,
    response::MessageResponse,
    routes::extract::{AppJson, AppPath},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/manual", post(create_manual_product))
        .route(
            "/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .route("/{id}/click", post(track_click))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Active products, newest first", body = ProductList),
        (status = 500, description = "Database error", body = MessageResponse)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductList>> {
    let resp = product_service::list_active_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added from the catalog", body = Product),
        (status = 400, description = "Amazon ID missing", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 409, description = "Amazon ID already listed", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    admin: AdminSession,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_from_catalog(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    post,
    path = "/api/products/manual",
    request_body = ManualProductRequest,
    responses(
        (status = 201, description = "Product added manually", body = Product),
        (status = 400, description = "Amazon ID, title or image missing", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 409, description = "Amazon ID already listed", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn create_manual_product(
    State(state): State<AppState>,
    admin: AdminSession,
    AppJson(payload): AppJson<ManualProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_manual(&state, &admin, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = MessageResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Invalid status", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    admin: AdminSession,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let product = product_service::update_product(&state, &admin, id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = MessageResponse),
        (status = 404, description = "Product not found", body = MessageResponse)
    ),
    security(("admin_session" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    admin: AdminSession,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let resp = product_service::delete_product(&state, &admin, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/{id}/click",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Click recorded, or failure swallowed", body = ClickResponse)
    ),
    tag = "Products"
)]
pub async fn track_click(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Json<ClickResponse> {
    Json(product_service::track_click(&state, &id).await)
}
