use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::queries;
use crate::models::ContactMessage;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

// POST /api/contact
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Response {
    let name = req.name.trim().to_string();
    let email = req.email.trim().to_string();
    let message = req.message.trim().to_string();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Name, email and message are required" })),
        )
            .into_response();
    }

    let record = ContactMessage {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email,
        subject: req.subject.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        message,
        created_at: state.clock.now(),
    };

    {
        let db = state.db.lock().unwrap();
        if let Err(e) = queries::create_contact_message(&db, &record) {
            tracing::error!(error = %e, "contact message write failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Something went wrong. Please try again." })),
            )
                .into_response();
        }
    }

    let body = format!(
        "From {} ({}): {}",
        record.name,
        record.email,
        record.message
    );
    if let Err(e) = state.notifier.send("New contact message", &body).await {
        tracing::error!(error = %e, "failed to forward contact message");
    }

    Json(json!({ "success": true, "id": record.id })).into_response()
}
