use chrono::{DateTime, Utc};

use crate::{
    config::AppConfig,
    dto::auth::{LoginRequest, LoginResponse, SessionUser, VerifyResponse},
    dto::non_blank,
    error::{AppError, AppResult},
    session::{SessionError, issue_token, verify_token},
};

/// A successful login: the response body plus the token for the cookie.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub body: LoginResponse,
}

pub fn login(
    config: &AppConfig,
    payload: LoginRequest,
    now: DateTime<Utc>,
) -> AppResult<LoginOutcome> {
    let (Some(username), Some(password)) = (non_blank(payload.username), non_blank(payload.password))
    else {
        return Err(AppError::BadRequest(
            "Username and password are required".into(),
        ));
    };

    if username != config.admin_username || password != config.admin_password {
        tracing::warn!(username = %username, "rejected admin login");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    tracing::info!(username = %username, "admin logged in");
    Ok(LoginOutcome {
        token: issue_token(&username, now),
        body: LoginResponse {
            message: "Login successful".into(),
            user: SessionUser { username },
        },
    })
}

/// Outcome of checking the session cookie. `Err` carries the 401 body.
pub fn verify(token: Option<&str>, now: DateTime<Utc>) -> Result<VerifyResponse, VerifyResponse> {
    let token = token.ok_or_else(unauthenticated)?;
    match verify_token(token, now) {
        Ok(username) => Ok(VerifyResponse {
            authenticated: true,
            user: Some(SessionUser { username }),
            message: None,
        }),
        Err(SessionError::Expired) => Err(VerifyResponse {
            authenticated: false,
            user: None,
            message: Some("Session expired".into()),
        }),
        Err(SessionError::Malformed) => Err(unauthenticated()),
    }
}

fn unauthenticated() -> VerifyResponse {
    VerifyResponse {
        authenticated: false,
        user: None,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config() -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/test".into(),
            database_anon_key: None,
            host: "127.0.0.1".into(),
            port: 3000,
            admin_username: "admin@example.com".into(),
            admin_password: "hunter22".into(),
            secure_cookies: false,
        }
    }

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    #[test]
    fn login_issues_verifiable_token() {
        let now = Utc::now();
        let outcome = login(&config(), credentials("admin@example.com", "hunter22"), now).unwrap();
        assert_eq!(outcome.body.user.username, "admin@example.com");

        let verified = verify(Some(outcome.token.as_str()), now + Duration::days(6)).unwrap();
        assert!(verified.authenticated);
    }

    #[test]
    fn login_rejects_wrong_password() {
        let err = login(&config(), credentials("admin@example.com", "nope"), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn login_requires_both_fields() {
        let err = login(&config(), LoginRequest::default(), Utc::now()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn verify_reports_expiry() {
        let issued = Utc::now() - Duration::days(8);
        let token = issue_token("admin@example.com", issued);
        let rejected = verify(Some(token.as_str()), Utc::now()).unwrap_err();
        assert!(!rejected.authenticated);
        assert_eq!(rejected.message.as_deref(), Some("Session expired"));
    }

    #[test]
    fn verify_without_cookie() {
        let rejected = verify(None, Utc::now()).unwrap_err();
        assert!(!rejected.authenticated);
        assert!(rejected.message.is_none());
    }
}
