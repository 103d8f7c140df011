// Type definitions and errors shared across the crate

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported file type '{0}'. Please upload CSV or Excel.")]
    UnsupportedFormat(String),

    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// Every failure aborts the whole call and surfaces as a single client
// error with a human-readable message; no structured error codes.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_message_names_the_file() {
        let err = AppError::UnsupportedFormat("report.txt".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Unsupported file type"));
        assert!(msg.contains("report.txt"));
    }
}
