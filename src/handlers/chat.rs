use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::services::ai::Message;
use crate::services::chat;
use crate::state::AppState;

/// Turns of context to keep per request; the widget sends its whole
/// transcript but only the tail matters for intent.
const HISTORY_WINDOW: usize = 6;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(rename = "bookingCreated", skip_serializing_if = "Option::is_none")]
    pub booking_created: Option<bool>,
}

// POST /api/chat
pub async fn chat_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let history: Vec<Message> = req
        .history
        .iter()
        .rev()
        .take(HISTORY_WINDOW)
        .rev()
        .cloned()
        .collect();

    match chat::process_chat(&state, req.message.trim(), &history).await {
        Ok(outcome) => Json(ChatResponse {
            response: outcome.response,
            booking_created: outcome.booking_created,
        }),
        Err(e) => {
            // The chat surface never shows a raw error
            tracing::error!(error = %e, "chat processing failed");
            Json(ChatResponse {
                response: chat::fallback_message(&state.config),
                booking_created: None,
            })
        }
    }
}
