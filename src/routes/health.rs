use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// `SET` or `MISSING`.
    pub database_url: String,
    /// `SET` or `MISSING`.
    pub anon_key: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    let config = &state.config;
    Json(HealthData {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        database_url: presence(!config.database_url.is_empty()),
        anon_key: presence(config.database_anon_key.is_some()),
    })
}

fn presence(set: bool) -> String {
    if set { "SET" } else { "MISSING" }.to_string()
}
