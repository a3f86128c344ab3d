use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Internal server error")]
    Internal,
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal | AppError::InternalWithMsg(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Records server-side causes. Client-facing text never carries them.
    pub fn log(&self) {
        match self {
            AppError::Database(e) => error!("Database error: {:?}", e),
            AppError::InternalWithMsg(msg) => error!("Internal error: {}", msg),
            _ => {}
        }
    }

    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database error".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::Internal | AppError::InternalWithMsg(_) => "Internal error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status();
        let body = Json(json!({
            "error": self.public_message()
        }));

        (status, body).into_response()
    }
}
