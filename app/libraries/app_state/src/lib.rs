use app_config::AppConfig;
use sqlx::SqlitePool;

/// Shared by every handler for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: SqlitePool,
}
