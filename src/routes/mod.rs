use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod banner;
pub mod doc;
pub mod extract;
pub mod health;
pub mod products;
pub mod top_offers;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/admin", admin::router())
        .nest("/banner", banner::router())
        .nest("/top-offers", top_offers::router())
        .nest("/auth", auth::router())
}
