#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use deal_curator::{
    config::AppConfig,
    entity::{banners, products, top_offers},
    middleware::auth::AdminSession,
    state::AppState,
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Transaction};
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";

pub fn config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/deal_curator_test".into(),
        database_anon_key: None,
        host: "127.0.0.1".into(),
        port: 3000,
        admin_username: ADMIN_USERNAME.into(),
        admin_password: ADMIN_PASSWORD.into(),
        secure_cookies: false,
    }
}

pub fn mock() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn state(orm: DatabaseConnection) -> AppState {
    AppState::new(orm, config())
}

pub fn admin() -> AdminSession {
    AdminSession {
        username: ADMIN_USERNAME.into(),
    }
}

pub fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

/// Debug rendering of each logged statement, SQL and bound values included.
pub fn statements(state: AppState) -> Vec<String> {
    let Ok(orm) = Arc::try_unwrap(state.orm) else {
        panic!("database connection is still shared");
    };
    let log: Vec<Transaction> = orm.into_transaction_log();
    log.iter().map(|txn| format!("{txn:?}")).collect()
}

pub fn product(amazon_id: &str) -> products::Model {
    let now = Utc::now().fixed_offset();
    products::Model {
        id: Uuid::new_v4(),
        amazon_id: amazon_id.into(),
        title: format!("Product {amazon_id}"),
        description: "A deal".into(),
        price: "19,99€".into(),
        original_price: Some("29,99€".into()),
        image: "https://example.com/image.jpg".into(),
        category: "Kitchen".into(),
        rating: 4.2,
        review_count: 120,
        discount: Some(33),
        tags: vec!["deal".into()],
        link: format!("https://amazon.de/dp/{amazon_id}?tag=50674-21"),
        status: "active".into(),
        click_count: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn banner(is_active: bool) -> banners::Model {
    let now = Utc::now().fixed_offset();
    banners::Model {
        id: Uuid::new_v4(),
        image_url: "data:image/png;base64,cG5nIQ==".into(),
        alt_text: Some("summer.png".into()),
        is_active,
        created_at: now,
        updated_at: now,
    }
}

pub fn offer(title: &str, sort_order: i32) -> top_offers::Model {
    let now = Utc::now().fixed_offset();
    top_offers::Model {
        id: Uuid::new_v4(),
        title: title.into(),
        description: None,
        image_url: "https://example.com/offer.png".into(),
        link: "https://amazon.de/deals".into(),
        category: "Top-Angebot".into(),
        is_active: true,
        sort_order,
        created_at: now,
        updated_at: now,
    }
}
