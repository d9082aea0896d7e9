use axum::{extract::FromRequestParts, http::header};
use chrono::Utc;

use crate::{
    error::AppError,
    session::{SessionError, token_from_cookie_header, verify_token},
};

/// An admin whose `admin-session` cookie verified.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;

        let username = verify_token(token, Utc::now()).map_err(|err| match err {
            SessionError::Expired => AppError::Unauthorized("Session expired".into()),
            SessionError::Malformed => AppError::Unauthorized("Invalid session".into()),
        })?;

        Ok(AdminSession { username })
    }
}

/// Session token from any `Cookie` header of the request.
pub fn session_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(token_from_cookie_header)
}
