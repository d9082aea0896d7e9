use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Anonymous key of the hosted database. Only reported by the health check.
    pub database_anon_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = database_url()?;
        let database_anon_key = env::var("DATABASE_ANON_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let admin_username = env::var("ADMIN_USERNAME").context("ADMIN_USERNAME is not set")?;
        let admin_password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD is not set")?;
        let secure_cookies = env::var("APP_ENV")
            .map(|value| value.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        Ok(Self {
            port,
            database_url,
            database_anon_key,
            host,
            admin_username,
            admin_password,
            secure_cookies,
        })
    }
}

/// Database URL alone, for the binaries that never serve HTTP.
pub fn database_url() -> anyhow::Result<String> {
    env::var("DATABASE_URL").context("DATABASE_URL is not set")
}
