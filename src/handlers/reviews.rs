use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::queries;
use crate::models::Review;
use crate::state::AppState;

const REVIEW_LIST_LIMIT: i64 = 50;

#[derive(Deserialize)]
pub struct ReviewRequest {
    pub name: String,
    pub rating: i32,
    pub comment: Option<String>,
}

// POST /api/reviews
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewRequest>,
) -> Response {
    let name = req.name.trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Name is required" })),
        )
            .into_response();
    }
    if !(1..=5).contains(&req.rating) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Rating must be between 1 and 5" })),
        )
            .into_response();
    }

    let review = Review {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        rating: req.rating,
        comment: req.comment.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
        created_at: state.clock.now(),
    };

    let result = {
        let db = state.db.lock().unwrap();
        queries::create_review(&db, &review)
    };
    match result {
        Ok(()) => Json(json!({ "success": true, "id": review.id })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "review write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": "Something went wrong. Please try again." })),
            )
                .into_response()
        }
    }
}

// GET /api/reviews
pub async fn list_reviews(State(state): State<Arc<AppState>>) -> Response {
    let result = {
        let db = state.db.lock().unwrap();
        queries::list_reviews(&db, REVIEW_LIST_LIMIT)
    };
    match result {
        Ok(reviews) => Json(json!({ "reviews": reviews })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "review list failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "failed to load reviews" })),
            )
                .into_response()
        }
    }
}
