use serde::{Deserialize, Serialize};

use crate::models::LocationKind;

/// Raw shape the LLM is asked to emit when classifying a chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedBooking {
    #[serde(rename = "isBooking", default)]
    pub is_booking: bool,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A booking request recognized in free text. Ephemeral: it must be completed
/// through the guided form before it can become a Booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingIntent {
    pub service: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<LocationKind>,
    pub notes: Option<String>,
    /// Always empty: the chat follow-up re-asks for every required field
    /// rather than only the ones extraction missed.
    pub missing_fields: Vec<&'static str>,
}

impl BookingIntent {
    pub fn from_extracted(raw: ExtractedBooking) -> Self {
        Self {
            service: raw.service,
            date: raw.date,
            time: raw.time,
            location: raw.location.as_deref().and_then(LocationKind::parse),
            notes: raw.notes,
            missing_fields: Vec::new(),
        }
    }
}
