use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::Deserialize;

use crate::db::queries;
use crate::models::{Booking, BookingStatus, LocationKind, ServiceKind, TimeSlot};
use crate::services::{calendar, service_area};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: ServiceKind,
    pub date: String,
    pub time: String,
    pub location: LocationKind,
    pub address: String,
    pub message: Option<String>,
    pub tip: Option<f64>,
}

#[derive(Debug)]
pub enum SubmitError {
    /// User-correctable; the message is surfaced verbatim.
    Invalid(String),
    Database(anyhow::Error),
}

/// Full submit-time validation pipeline, then a pending record write.
///
/// The slot-conflict read shown to users via `list_slots` and this write are
/// separate requests with no lock between them: two submissions for the same
/// (date, time) can both succeed. Known limitation, not a guarantee this
/// layer makes.
pub async fn submit_booking(
    state: &Arc<AppState>,
    req: BookingRequest,
) -> Result<Booking, SubmitError> {
    let name = req.name.trim().to_string();
    let email = req.email.trim().to_string();
    let phone = req.phone.trim().to_string();
    let address = req.address.trim().to_string();

    if name.is_empty() {
        return Err(SubmitError::Invalid("Name is required".to_string()));
    }
    if !is_plausible_email(&email) {
        return Err(SubmitError::Invalid(
            "A valid email address is required".to_string(),
        ));
    }
    if phone.is_empty() {
        return Err(SubmitError::Invalid("Phone number is required".to_string()));
    }
    if let Some(tip) = req.tip {
        if tip < 0.0 {
            return Err(SubmitError::Invalid("Tip cannot be negative".to_string()));
        }
    }

    if !service_area::is_within_service_area(&address, &state.config.service_area) {
        return Err(SubmitError::Invalid(service_area::out_of_area_message(
            &state.config.service_area,
        )));
    }

    let date = NaiveDate::parse_from_str(req.date.trim(), "%Y-%m-%d")
        .map_err(|_| SubmitError::Invalid("Invalid date format, expected YYYY-MM-DD".to_string()))?;

    let now = state.clock.now();
    let horizon = state.config.schedule.horizon_days;
    if date > now.date() + Duration::days(horizon) {
        return Err(SubmitError::Invalid(format!(
            "Bookings can only be made up to {horizon} days in advance"
        )));
    }

    calendar::validate_booking_datetime(date, req.time.trim(), now, &state.config.schedule)
        .map_err(|e| SubmitError::Invalid(e.to_string()))?;

    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        email,
        phone,
        service: req.service,
        date,
        time: req.time.trim().to_string(),
        location: req.location,
        address,
        message: req.message.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()),
        tip: req.tip,
        status: BookingStatus::Pending,
        created_at: now,
    };

    {
        let db = state.db.lock().unwrap();
        queries::create_booking(&db, &booking).map_err(SubmitError::Database)?;
    }

    tracing::info!(
        id = %booking.id,
        service = booking.service.as_str(),
        date = %booking.date,
        time = %booking.time,
        "booking created"
    );

    let body = format!(
        "New booking request from {} ({}) for {} on {} at {}.",
        booking.name,
        booking.email,
        booking.service.as_str(),
        calendar::format_booking_date(booking.date),
        booking.time,
    );
    if let Err(e) = state.notifier.send("New booking request", &body).await {
        tracing::error!(error = %e, "failed to send booking notification");
    }

    Ok(booking)
}

/// Ordered slots for a date, with hours held by pending or confirmed
/// bookings marked unavailable.
pub fn list_slots(state: &Arc<AppState>, date: NaiveDate) -> anyhow::Result<Vec<TimeSlot>> {
    let occupied = {
        let db = state.db.lock().unwrap();
        queries::occupied_times_for_date(&db, date, BookingStatus::occupying())?
    };
    let booked: HashSet<String> = occupied.into_iter().collect();
    Ok(calendar::generate_time_slots(
        date,
        &booked,
        state.clock.now(),
        &state.config.schedule,
    ))
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_email() {
        assert!(is_plausible_email("ana@example.com"));
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ana@nodot"));
        assert!(!is_plausible_email("ana@.com"));
    }
}
