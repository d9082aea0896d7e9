use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use crate::{
    catalog::fetch_amazon_product,
    dto::non_blank,
    dto::products::{
        ClickResponse, CreateProductRequest, ManualProductRequest, ProductList, ProductStats,
        UpdateProductRequest,
    },
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    models::{Product, STATUS_ACTIVE, STATUS_INACTIVE},
    referral::{add_referral_code, amazon_product_link},
    response::MessageResponse,
    state::AppState,
};

const DEFAULT_CATEGORY: &str = "Allgemein";
const DUPLICATE_MESSAGE: &str = "Product with this Amazon ID already exists";

/// Storefront listing: active products, newest first.
pub async fn list_active_products(state: &AppState) -> AppResult<ProductList> {
    let items = Products::find()
        .filter(Column::Status.eq(STATUS_ACTIVE))
        .order_by_desc(Column::CreatedAt)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(ProductList { items })
}

/// Admin listing: every product regardless of status, newest first.
pub async fn list_all_products(state: &AppState) -> AppResult<ProductList> {
    let items = Products::find()
        .order_by_desc(Column::CreatedAt)
        .all(&*state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(ProductList { items })
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    let result = Products::find_by_id(id)
        .one(&*state.orm)
        .await?
        .map(Product::from);
    match result {
        Some(p) => Ok(p),
        None => Err(AppError::NotFound("Product not found".into())),
    }
}

/// Adds a product by ASIN, filling the listing from the catalog.
pub async fn create_from_catalog(
    state: &AppState,
    admin: &AdminSession,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let amazon_id = normalize_amazon_id(payload.amazon_id)
        .ok_or_else(|| AppError::BadRequest("Amazon ID is required".into()))?;
    ensure_new_amazon_id(state, &amazon_id).await?;

    let listing = fetch_amazon_product(&amazon_id);
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        amazon_id: Set(amazon_id),
        title: Set(listing.title),
        description: Set(listing.description),
        price: Set(listing.price),
        original_price: Set(listing.original_price),
        image: Set(listing.image),
        category: Set(listing.category),
        rating: Set(listing.rating),
        review_count: Set(listing.review_count),
        discount: Set(listing.discount),
        tags: Set(listing.tags),
        link: Set(add_referral_code(&listing.link)),
        status: Set(STATUS_ACTIVE.to_string()),
        click_count: Set(0),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let product = insert_product(state, active).await?;

    tracing::info!(
        actor = %admin.username,
        product_id = %product.id,
        amazon_id = %product.amazon_id,
        "product added from catalog"
    );
    Ok(Product::from(product))
}

/// Adds a product from admin-supplied fields.
pub async fn create_manual(
    state: &AppState,
    admin: &AdminSession,
    payload: ManualProductRequest,
) -> AppResult<Product> {
    let (Some(amazon_id), Some(title), Some(image)) = (
        normalize_amazon_id(payload.amazon_id),
        non_blank(payload.title),
        non_blank(payload.image),
    ) else {
        return Err(AppError::BadRequest(
            "Amazon ID, title, and image are required".into(),
        ));
    };
    ensure_new_amazon_id(state, &amazon_id).await?;

    let link = match non_blank(payload.link) {
        Some(link) => add_referral_code(&link),
        None => amazon_product_link(&amazon_id),
    };

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        amazon_id: Set(amazon_id),
        title: Set(title),
        description: Set(payload.description.unwrap_or_default()),
        price: Set(payload.price.unwrap_or_default()),
        original_price: Set(None),
        image: Set(image),
        category: Set(non_blank(payload.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string())),
        rating: Set(0.0),
        review_count: Set(0),
        discount: Set(None),
        tags: Set(Vec::new()),
        link: Set(link),
        status: Set(STATUS_ACTIVE.to_string()),
        click_count: Set(0),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let product = insert_product(state, active).await?;

    tracing::info!(
        actor = %admin.username,
        product_id = %product.id,
        amazon_id = %product.amazon_id,
        "product added manually"
    );
    Ok(Product::from(product))
}

pub async fn update_product(
    state: &AppState,
    admin: &AdminSession,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    if let Some(status) = payload.status.as_deref() {
        validate_status(status)?;
    }

    let existing = Products::find_by_id(id).one(&*state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product not found".into())),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(title) = payload.title {
        active.title = Set(title);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(original_price) = payload.original_price {
        active.original_price = Set(original_price);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }
    if let Some(review_count) = payload.review_count {
        active.review_count = Set(review_count);
    }
    if let Some(discount) = payload.discount {
        active.discount = Set(discount);
    }
    if let Some(tags) = payload.tags {
        active.tags = Set(tags);
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    // An empty link is ignored rather than stored.
    if let Some(link) = non_blank(payload.link) {
        active.link = Set(add_referral_code(&link));
    }
    active.updated_at = Set(Utc::now().into());

    let product = active.update(&*state.orm).await?;

    tracing::info!(actor = %admin.username, product_id = %product.id, "product updated");
    Ok(Product::from(product))
}

pub async fn delete_product(
    state: &AppState,
    admin: &AdminSession,
    id: Uuid,
) -> AppResult<MessageResponse> {
    let result = Products::delete_by_id(id).exec(&*state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product not found".into()));
    }

    tracing::info!(actor = %admin.username, product_id = %id, "product deleted");
    Ok(MessageResponse::new("Product deleted successfully"))
}

/// Counts an outbound click. Never fails: the storefront redirects either way.
pub async fn track_click(state: &AppState, raw_id: &str) -> ClickResponse {
    let Ok(id) = Uuid::parse_str(raw_id.trim()) else {
        tracing::warn!(product_id = %raw_id, "click on malformed product id");
        return click_tracked();
    };

    let result = Products::update_many()
        .col_expr(Column::ClickCount, Expr::col(Column::ClickCount).add(1))
        .filter(Column::Id.eq(id))
        .exec_with_returning(&*state.orm)
        .await;

    match result {
        Ok(rows) => match rows.first() {
            Some(product) => ClickResponse {
                success: true,
                message: "Click tracked successfully".into(),
                click_count: Some(product.click_count),
            },
            None => {
                tracing::warn!(product_id = %id, "click on unknown product");
                click_tracked()
            }
        },
        Err(err) => {
            tracing::warn!(product_id = %id, error = %err, "click tracking failed");
            click_tracked()
        }
    }
}

pub async fn product_stats(state: &AppState) -> AppResult<ProductStats> {
    let products = Products::find()
        .order_by_asc(Column::CreatedAt)
        .all(&*state.orm)
        .await?;
    Ok(summarize(&products))
}

/// Totals plus distinct categories and tags, in first-seen order.
pub fn summarize(products: &[ProductModel]) -> ProductStats {
    let mut categories: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
        for tag in &product.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }

    ProductStats {
        total: products.len(),
        active: products
            .iter()
            .filter(|p| p.status == STATUS_ACTIVE)
            .count(),
        categories,
        tags,
    }
}

fn click_tracked() -> ClickResponse {
    ClickResponse {
        success: true,
        message: "Click tracked".into(),
        click_count: None,
    }
}

/// ASINs are compared and stored without surrounding whitespace.
fn normalize_amazon_id(raw: Option<String>) -> Option<String> {
    non_blank(raw).map(|id| id.trim().to_string())
}

async fn ensure_new_amazon_id(state: &AppState, amazon_id: &str) -> AppResult<()> {
    let existing = Products::find()
        .filter(Column::AmazonId.eq(amazon_id))
        .one(&*state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(DUPLICATE_MESSAGE.into()));
    }
    Ok(())
}

/// Inserts, reporting a lost race on the unique ASIN as a conflict.
async fn insert_product(state: &AppState, active: ActiveModel) -> AppResult<ProductModel> {
    active.insert(&*state.orm).await.map_err(|err: DbErr| {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(DUPLICATE_MESSAGE.into())
            }
            _ => AppError::from(err),
        }
    })
}

fn validate_status(status: &str) -> Result<(), AppError> {
    const VALID: [&str; 2] = [STATUS_ACTIVE, STATUS_INACTIVE];
    if VALID.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid product status".into()))
    }
}
