use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    // sea-orm drops `Clone` on the connection when its `mock` feature is on.
    pub orm: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            orm: Arc::new(orm),
            config: Arc::new(config),
        }
    }
}
