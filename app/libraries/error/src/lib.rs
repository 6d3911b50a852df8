use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde::Serialize;
use serde_json::json;
use sqlx::Error as SqlxError;
use std::{error::Error as StdError, fmt, io::Error as IoError};

pub static SYSTEM_ERROR_CODE_DB: i64 = -1001;
pub static SYSTEM_ERROR_CODE_IO: i64 = -1002;
pub static SYSTEM_ERROR_CODE_CONFIG: i64 = -1003;
pub static CLIENT_ERROR_CODE_REQUEST: i64 = -2000;

#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub message: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub code: i64,
}

fn serialize_status<S>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_u16(status.as_u16())
}

impl AppError {
    pub fn new(message: impl Into<String>, status: StatusCode, code: i64) -> Self {
        Self {
            message: message.into(),
            status,
            code,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST, CLIENT_ERROR_CODE_REQUEST)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_CONFIG,
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"message":"{}","status":{},"code":{}}}"#,
            self.message,
            self.status.as_u16(),
            self.code
        )
    }
}

impl StdError for AppError {}

/// Clients only ever see `{"error": "<message>"}`; status and code stay in the logs.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(
            "AppError ({}): {} (HTTP {})",
            self.code,
            self.message,
            self.status.as_u16()
        );
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

// --------------------
// Error conversions
// --------------------

impl From<SqlxError> for AppError {
    fn from(value: SqlxError) -> Self {
        // Database errors carry the driver's own text, e.g. "no such column: Foo"
        let message = match &value {
            SqlxError::Database(db) => db.message().to_string(),
            other => other.to_string(),
        };
        Self::new(
            message,
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_DB,
        )
    }
}

impl From<IoError> for AppError {
    fn from(value: IoError) -> Self {
        Self::new(
            value.to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
            SYSTEM_ERROR_CODE_IO,
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(value: JsonRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        Self::bad_request(value.body_text())
    }
}
