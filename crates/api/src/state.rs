use std::sync::Arc;

use catalog_core::repository::CategoryRepository;
use catalog_db::repositories::PgCategoryRepository;
use catalog_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: DbPool,
    /// Category store handlers persist through.
    pub repo: Arc<dyn CategoryRepository>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the production state: a Postgres-backed repository over the
    /// given pool.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            repo: Arc::new(PgCategoryRepository::new(pool.clone())),
            pool,
            config: Arc::new(config),
        }
    }
}
