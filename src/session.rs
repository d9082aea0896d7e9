//! Admin session tokens and the cookie that carries them.
//!
//! A token is `base64("<username>:<issued_at_ms>")`. Nothing is signed, so
//! anyone who knows the format can mint one; this only keeps casual visitors
//! out of the admin pages.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use thiserror::Error;

pub const SESSION_COOKIE: &str = "admin-session";

/// Seven days.
pub const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session token is malformed")]
    Malformed,

    #[error("Session expired")]
    Expired,
}

pub fn issue_token(username: &str, now: DateTime<Utc>) -> String {
    STANDARD.encode(format!("{username}:{}", now.timestamp_millis()))
}

/// Returns the username carried by `token` if it was issued less than
/// [`SESSION_MAX_AGE_SECS`] before `now`.
pub fn verify_token(token: &str, now: DateTime<Utc>) -> Result<String, SessionError> {
    let bytes = STANDARD
        .decode(token.trim())
        .map_err(|_| SessionError::Malformed)?;
    let decoded = String::from_utf8(bytes).map_err(|_| SessionError::Malformed)?;

    // Usernames are e-mail addresses but may contain colons, the timestamp never does.
    let (username, issued_at) = decoded.rsplit_once(':').ok_or(SessionError::Malformed)?;
    if username.is_empty() {
        return Err(SessionError::Malformed);
    }
    let issued_at_ms: i64 = issued_at.parse().map_err(|_| SessionError::Malformed)?;

    let age_ms = now.timestamp_millis().saturating_sub(issued_at_ms);
    if age_ms >= SESSION_MAX_AGE_SECS * 1000 {
        return Err(SessionError::Expired);
    }

    Ok(username.to_string())
}

/// `Set-Cookie` value for a fresh session.
pub fn session_cookie(token: &str, secure: bool) -> String {
    cookie_with_max_age(token, SESSION_MAX_AGE_SECS, secure)
}

/// `Set-Cookie` value that makes the browser drop the session.
pub fn cleared_session_cookie(secure: bool) -> String {
    cookie_with_max_age("", 0, secure)
}

fn cookie_with_max_age(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie =
        format!("{SESSION_COOKIE}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Finds the session token in a `Cookie` request header.
pub fn token_from_cookie_header(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}
