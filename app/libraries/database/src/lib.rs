//! SQLite pool and table bootstrap.

use app_config::AppConfig;
use app_error::AppError;
use app_schema::customer::Customer;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;
use tracing::*;

/// Opens the pool described by `database_url` / `db_connection`.
///
/// `LIKE` is made case-sensitive on every connection so list filters
/// match exact substrings.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| {
            AppError::config(format!(
                "Invalid database_url {}: {}",
                &config.database_url, e
            ))
        })?
        .pragma("case_sensitive_like", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_connection.max(1))
        .connect_with(options)
        .await?;
    debug!("Opened SQLite pool at {}", &config.database_url);
    Ok(pool)
}

/// Creates the `clientes` table if it does not exist yet. Existing tables
/// are left untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(Customer::create_table()).execute(pool).await?;
    info!("Table clientes is ready");
    Ok(())
}

/// `connect` followed by `init_schema`; the server calls this before it binds.
pub async fn open(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let pool = connect(config).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
