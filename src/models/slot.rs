use serde::{Deserialize, Serialize};

/// One bookable hour on a given date. Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}
