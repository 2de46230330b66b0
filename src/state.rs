use std::sync::Arc;

use sqlx::MySqlPool;

use crate::config::AppConfig;

/// The shared application state.
///
/// Cloned into every handler through Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The MySQL connection pool.
    pub db: MySqlPool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: MySqlPool, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config) }
    }
}
