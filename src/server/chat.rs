//! `POST /api/chat` handler.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AppState;
use crate::error::{BotError, Result};

/// Incoming chat body. `message` is kept loosely typed so a wrong type gets a
/// specific error instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn chat(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let Json(request) =
        payload.map_err(|rejection| BotError::InvalidRequest(rejection.body_text()))?;
    let message = validate_message(request.message)?;

    if !state.reply_delay.is_zero() {
        tokio::time::sleep(state.reply_delay).await;
    }

    let reply = state.responder.reply(&message);
    info!(
        "Replied with {} to a {}-char message",
        reply.intent,
        message.chars().count()
    );

    Ok(Json(ChatResponse {
        response: reply.text,
    }))
}

fn validate_message(message: Option<Value>) -> Result<String> {
    match message {
        None | Some(Value::Null) => Err(BotError::InvalidMessage(
            "Message is required".to_string(),
        )),
        Some(Value::String(text)) if text.trim().is_empty() => Err(BotError::InvalidMessage(
            "Message must not be empty".to_string(),
        )),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(BotError::InvalidMessage(
            "Message must be a string".to_string(),
        )),
    }
}
