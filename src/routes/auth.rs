use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;

use crate::{
    dto::auth::{LoginRequest, LoginResponse, VerifyResponse},
    error::{AppError, AppResult},
    middleware::auth::session_token,
    response::MessageResponse,
    routes::extract::AppJson,
    services::auth_service,
    session::{cleared_session_cookie, session_cookie},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/verify", get(verify))
        .route("/logout", post(logout))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; sets the admin-session cookie", body = LoginResponse),
        (status = 400, description = "Username or password missing", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Response> {
    let outcome = auth_service::login(&state.config, payload, Utc::now())?;
    let cookie = set_cookie(session_cookie(&outcome.token, state.config.secure_cookies))?;
    Ok((cookie, Json(outcome.body)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Session is valid", body = VerifyResponse),
        (status = 401, description = "Missing, malformed or expired session", body = VerifyResponse)
    ),
    tag = "Auth"
)]
pub async fn verify(headers: HeaderMap) -> (StatusCode, Json<VerifyResponse>) {
    match auth_service::verify(session_token(&headers), Utc::now()) {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(body) => (StatusCode::UNAUTHORIZED, Json(body)),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(State(state): State<AppState>) -> AppResult<Response> {
    let cookie = set_cookie(cleared_session_cookie(state.config.secure_cookies))?;
    Ok((cookie, Json(MessageResponse::new("Logged out"))).into_response())
}

fn set_cookie(value: String) -> AppResult<[(header::HeaderName, HeaderValue); 1]> {
    let value = HeaderValue::try_from(value)
        .map_err(|err| AppError::Internal(anyhow::anyhow!(err)))?;
    Ok([(header::SET_COOKIE, value)])
}
