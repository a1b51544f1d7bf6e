use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BotError {
    /// HTTP status used when this error is returned from a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            BotError::InvalidRequest(_) | BotError::InvalidMessage(_) => StatusCode::BAD_REQUEST,
            BotError::Config(_) | BotError::Io(_) | BotError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns a user-friendly error message suitable for the chat page
    pub fn user_message(&self) -> String {
        match self {
            BotError::InvalidMessage(reason) => reason.clone(),
            BotError::InvalidRequest(_) => {
                "Request body must be a JSON object with a \"message\" field.".to_string()
            }
            BotError::Config(_) | BotError::Io(_) | BotError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {self}");
        } else {
            log::warn!("Rejected request: {self}");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
