use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::{AppError, AppResult};

/// Server state — shared by every request handler
///
/// Carries the immutable configuration and the SQLite connection pool.
/// Cloning is cheap: the pool is internally reference-counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Build state from pre-existing parts
    ///
    /// Usually [`ServerState::initialize`] is what you want
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state
    ///
    /// Order:
    /// 1. Ensure the data directory exists
    /// 2. Open the database (pool + migrations)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_data_dir()
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {e}")))?;

        let db = DbService::new(&config.database_path).await?;

        Ok(Self::new(config.clone(), db.pool))
    }
}
