use app_error::AppError;
use app_log::LogLevel;
use dotenv::dotenv;
use log::*;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

pub const APP_CONFIG: &str = "APP_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_bind: String, // 0.0.0.0:3001
    pub database_url: String, // sqlite://clientes.db?mode=rwc
    pub db_connection: u32,   // 1
    pub log_level: LogLevel,  // Off, Error, Warn, Info, Debug, Trace
    pub max_page_size: i64,   // 1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_bind: "0.0.0.0:3001".to_owned(),
            database_url: "sqlite://clientes.db?mode=rwc".to_owned(),
            db_connection: 1,
            log_level: LogLevel::Info,
            max_page_size: 1000,
        }
    }
}

impl AppConfig {
    /// Reads the JSON file named by `APP_CONFIG`, falling back to defaults
    /// when the variable is not set.
    pub fn new() -> Result<Self, AppError> {
        dotenv().ok();
        match env::var(APP_CONFIG) {
            Err(e) => {
                debug!("{}; using default configuration", &e);
                Ok(Self::default())
            }
            Ok(config_file_path) => Self::from_file(config_file_path),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let config_file = fs::File::open(path).map_err(|e| {
            AppError::config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        serde_json::from_reader(config_file).map_err(|e| {
            AppError::config(format!("Cannot parse config file {}: {}", path.display(), e))
        })
    }
}
