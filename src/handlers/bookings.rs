use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::services::booking::{self, BookingRequest, SubmitError};
use crate::services::calendar;
use crate::state::AppState;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Response {
    match booking::submit_booking(&state, req).await {
        Ok(created) => Json(json!({
            "success": true,
            "id": created.id,
            "status": created.status,
            "service": created.service,
            "scheduled_for": format!("{} at {}", calendar::format_booking_date(created.date), created.time),
        }))
        .into_response(),
        Err(SubmitError::Invalid(error)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": error })),
        )
            .into_response(),
        Err(SubmitError::Database(e)) => {
            tracing::error!(error = %e, "booking write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Something went wrong saving your booking. Please try again." })),
            )
                .into_response()
        }
    }
}

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Response {
    let date = match NaiveDate::parse_from_str(query.date.trim(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid date format, expected YYYY-MM-DD" })),
            )
                .into_response()
        }
    };

    match booking::list_slots(&state, date) {
        Ok(slots) => Json(json!({ "date": query.date.trim(), "slots": slots })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "slot query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "failed to load time slots" })),
            )
                .into_response()
        }
    }
}
