use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::top_offers::TopOfferList, error::AppResult, response::MessageResponse,
    services::top_offer_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_active_offers))
}

#[utoipa::path(
    get,
    path = "/api/top-offers",
    responses(
        (status = 200, description = "Active top offers by sort order", body = TopOfferList),
        (status = 500, description = "Database error", body = MessageResponse)
    ),
    tag = "Top offers"
)]
pub async fn list_active_offers(State(state): State<AppState>) -> AppResult<Json<TopOfferList>> {
    let resp = top_offer_service::list_active_offers(&state).await?;
    Ok(Json(resp))
}
