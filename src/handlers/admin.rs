use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    if let Some(status) = query.status.as_deref() {
        if BookingStatus::parse(status).is_none() {
            return Err(AppError::BadRequest(format!("unknown status: {status}")));
        }
    }

    let limit = query.limit.unwrap_or(100).clamp(1, 500);
    let bookings = {
        let db = state.db.lock().unwrap();
        queries::get_all_bookings(&db, query.status.as_deref(), limit)?
    };
    Ok(Json(bookings))
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let status = BookingStatus::parse(&update.status)
        .ok_or_else(|| AppError::BadRequest(format!("unknown status: {}", update.status)))?;

    let updated = {
        let db = state.db.lock().unwrap();
        queries::update_booking_status(&db, &id, &status)?
    };
    if !updated {
        return Err(AppError::NotFound(format!("booking {id}")));
    }

    tracing::info!(id = %id, status = status.as_str(), "booking status updated");
    Ok(Json(json!({ "success": true, "id": id, "status": status })))
}

// GET /api/admin/messages
pub async fn get_contact_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let messages = {
        let db = state.db.lock().unwrap();
        queries::list_contact_messages(&db, 200)?
    };
    Ok(Json(json!({ "messages": messages })))
}
