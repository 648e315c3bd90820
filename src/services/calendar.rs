use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::config::ScheduleConfig;
use crate::models::TimeSlot;

#[derive(Debug, PartialEq)]
pub enum ScheduleError {
    InPast,
    NotWorkingDay,
    OutsideWorkingHours { start: u32, end: u32 },
    MalformedTime,
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InPast => {
                write!(f, "Cannot book appointments in the past")
            }
            ScheduleError::NotWorkingDay => {
                write!(f, "We only accept bookings on weekdays (Monday-Friday)")
            }
            ScheduleError::OutsideWorkingHours { start, end } => {
                write!(
                    f,
                    "Bookings are only available between {start}:00 and {end}:00"
                )
            }
            ScheduleError::MalformedTime => {
                write!(f, "Invalid time format, expected HH:00")
            }
        }
    }
}

pub fn is_working_day(date: NaiveDate, schedule: &ScheduleConfig) -> bool {
    schedule.business_days.contains(&date.weekday())
}

/// True iff the instant falls on a business day with an hour in
/// [start_hour, end_hour). The end hour itself is excluded, so the last
/// bookable slot starts one hour earlier.
pub fn is_within_working_hours(dt: NaiveDateTime, schedule: &ScheduleConfig) -> bool {
    is_working_day(dt.date(), schedule)
        && dt.hour() >= schedule.start_hour
        && dt.hour() < schedule.end_hour
}

/// Hourly slots for a date, ascending. On the current date, hours at or
/// before the current hour are omitted entirely; a slot whose label appears
/// in `booked` is kept but marked unavailable.
pub fn generate_time_slots(
    date: NaiveDate,
    booked: &HashSet<String>,
    now: NaiveDateTime,
    schedule: &ScheduleConfig,
) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    for hour in schedule.start_hour..schedule.end_hour {
        if date == now.date() && hour <= now.hour() {
            continue;
        }
        let label = format!("{hour:02}:00");
        let available = !booked.contains(&label);
        slots.push(TimeSlot {
            time: label,
            available,
        });
    }
    slots
}

pub fn validate_booking_datetime(
    date: NaiveDate,
    time: &str,
    now: NaiveDateTime,
    schedule: &ScheduleConfig,
) -> Result<(), ScheduleError> {
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| ScheduleError::MalformedTime)?;
    // Bookings are hourly; slot labels are always HH:00, so anything with
    // minutes would never show up in conflict accounting.
    if time.minute() != 0 {
        return Err(ScheduleError::MalformedTime);
    }
    let dt = date.and_time(time);

    if dt < now {
        return Err(ScheduleError::InPast);
    }
    if !is_working_day(date, schedule) {
        return Err(ScheduleError::NotWorkingDay);
    }
    if !is_within_working_hours(dt, schedule) {
        return Err(ScheduleError::OutsideWorkingHours {
            start: schedule.start_hour,
            end: schedule.end_hour,
        });
    }
    Ok(())
}

/// Long-form rendering for confirmation text, e.g. "Monday, June 16, 2025".
/// Display only, never part of validation.
pub fn format_booking_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn schedule() -> ScheduleConfig {
        ScheduleConfig {
            start_hour: 8,
            end_hour: 18,
            business_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            horizon_days: 90,
        }
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_working_day() {
        // 2025-06-16 is a Monday, 2025-06-21 a Saturday
        assert!(is_working_day(d("2025-06-16"), &schedule()));
        assert!(!is_working_day(d("2025-06-21"), &schedule()));
        assert!(!is_working_day(d("2025-06-22"), &schedule()));
    }

    #[test]
    fn test_working_hours_boundaries() {
        let s = schedule();
        assert!(is_within_working_hours(dt("2025-06-16 08:00"), &s));
        assert!(is_within_working_hours(dt("2025-06-16 17:00"), &s));
        assert!(!is_within_working_hours(dt("2025-06-16 18:00"), &s));
        assert!(!is_within_working_hours(dt("2025-06-16 07:59"), &s));
        // Right hour, wrong day
        assert!(!is_within_working_hours(dt("2025-06-21 10:00"), &s));
    }

    #[test]
    fn test_slots_future_date_all_open() {
        let slots = generate_time_slots(
            d("2025-06-17"),
            &HashSet::new(),
            dt("2025-06-16 09:30"),
            &schedule(),
        );
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[0].time, "08:00");
        assert_eq!(slots[9].time, "17:00");
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_slots_today_drops_past_hours() {
        // 09:30 now: hours 8 and 9 are gone, 10:00 is the first slot
        let slots = generate_time_slots(
            d("2025-06-16"),
            &HashSet::new(),
            dt("2025-06-16 09:30"),
            &schedule(),
        );
        assert_eq!(slots[0].time, "10:00");
        assert_eq!(slots.len(), 8);
    }

    #[test]
    fn test_slots_mark_booked() {
        let booked: HashSet<String> = ["09:00".to_string()].into_iter().collect();
        let slots = generate_time_slots(
            d("2025-06-17"),
            &booked,
            dt("2025-06-16 09:30"),
            &schedule(),
        );
        let nine = slots.iter().find(|s| s.time == "09:00").unwrap();
        assert!(!nine.available);
        assert!(slots.iter().filter(|s| s.time != "09:00").all(|s| s.available));
    }

    #[test]
    fn test_validate_rejects_past() {
        let err = validate_booking_datetime(
            d("2025-06-16"),
            "08:00",
            dt("2025-06-16 09:30"),
            &schedule(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::InPast);
        assert_eq!(err.to_string(), "Cannot book appointments in the past");
    }

    #[test]
    fn test_validate_rejects_weekend() {
        let err = validate_booking_datetime(
            d("2025-06-21"),
            "10:00",
            dt("2025-06-16 09:30"),
            &schedule(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::NotWorkingDay);
        assert!(err.to_string().contains("weekdays (Monday-Friday)"));
    }

    #[test]
    fn test_validate_rejects_after_hours() {
        let err = validate_booking_datetime(
            d("2025-06-17"),
            "19:00",
            dt("2025-06-16 09:30"),
            &schedule(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutsideWorkingHours { start: 8, end: 18 }
        );
        assert!(err.to_string().contains("between 8:00 and 18:00"));
    }

    #[test]
    fn test_validate_accepts_valid_slot() {
        let result = validate_booking_datetime(
            d("2025-06-17"),
            "08:00",
            dt("2025-06-16 09:30"),
            &schedule(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_malformed_time() {
        let err = validate_booking_datetime(
            d("2025-06-17"),
            "morning",
            dt("2025-06-16 09:30"),
            &schedule(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::MalformedTime);
    }

    #[test]
    fn test_validate_rejects_partial_hours() {
        // 08:30 parses as a time but can never match an HH:00 slot label
        let err = validate_booking_datetime(
            d("2025-06-17"),
            "08:30",
            dt("2025-06-16 09:30"),
            &schedule(),
        )
        .unwrap_err();
        assert_eq!(err, ScheduleError::MalformedTime);
    }

    #[test]
    fn test_format_booking_date() {
        assert_eq!(format_booking_date(d("2025-06-16")), "Monday, June 16, 2025");
        assert_eq!(format_booking_date(d("2025-03-05")), "Wednesday, March 5, 2025");
    }
}
