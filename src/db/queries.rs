use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};

use crate::models::{
    Booking, BookingStatus, ContactMessage, LocationKind, Review, ServiceKind,
};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FMT: &str = "%Y-%m-%d";

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, name, email, phone, service, date, time, location, address, message, tip, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            booking.id,
            booking.name,
            booking.email,
            booking.phone,
            booking.service.as_str(),
            booking.date.format(DATE_FMT).to_string(),
            booking.time,
            booking.location.as_str(),
            booking.address,
            booking.message,
            booking.tip,
            booking.status.as_str(),
            booking.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Time labels already held on a date by bookings in any of the given
/// statuses. Feeds the slot generator's `booked` set.
pub fn occupied_times_for_date(
    conn: &Connection,
    date: NaiveDate,
    statuses: &[BookingStatus],
) -> anyhow::Result<Vec<String>> {
    let placeholders = (0..statuses.len())
        .map(|i| format!("?{}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "SELECT time FROM bookings WHERE date = ?1 AND status IN ({placeholders}) ORDER BY time ASC"
    );

    let mut params_vec: Vec<Box<dyn rusqlite::types::ToSql>> =
        vec![Box::new(date.format(DATE_FMT).to_string())];
    for status in statuses {
        params_vec.push(Box::new(status.as_str()));
    }
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_refs.as_slice(), |row| row.get::<_, String>(0))?;

    let mut times = vec![];
    for row in rows {
        times.push(row?);
    }
    Ok(times)
}

pub fn get_all_bookings(
    conn: &Connection,
    status_filter: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<Booking>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status_filter {
        Some(status) => (
            "SELECT id, name, email, phone, service, date, time, location, address, message, tip, status, created_at \
             FROM bookings WHERE status = ?1 ORDER BY date DESC, time DESC LIMIT ?2"
                .to_string(),
            vec![
                Box::new(status.to_string()) as Box<dyn rusqlite::types::ToSql>,
                Box::new(limit),
            ],
        ),
        None => (
            "SELECT id, name, email, phone, service, date, time, location, address, message, tip, status, created_at \
             FROM bookings ORDER BY date DESC, time DESC LIMIT ?1"
                .to_string(),
            vec![Box::new(limit) as Box<dyn rusqlite::types::ToSql>],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, name, email, phone, service, date, time, location, address, message, tip, status, created_at \
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: &BookingStatus,
) -> anyhow::Result<bool> {
    let count = conn.execute(
        "UPDATE bookings SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(count > 0)
}

fn parse_booking_row(row: &Row<'_>) -> anyhow::Result<Booking> {
    let service_str: String = row.get(4)?;
    let date_str: String = row.get(5)?;
    let location_str: String = row.get(7)?;
    let status_str: String = row.get(11)?;
    let created_at_str: String = row.get(12)?;

    Ok(Booking {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        service: ServiceKind::parse(&service_str)
            .ok_or_else(|| anyhow::anyhow!("unknown service in row: {service_str}"))?,
        date: NaiveDate::parse_from_str(&date_str, DATE_FMT)?,
        time: row.get(6)?,
        location: LocationKind::parse(&location_str)
            .ok_or_else(|| anyhow::anyhow!("unknown location in row: {location_str}"))?,
        address: row.get(8)?,
        message: row.get(9)?,
        tip: row.get(10)?,
        status: BookingStatus::parse(&status_str)
            .ok_or_else(|| anyhow::anyhow!("unknown status in row: {status_str}"))?,
        created_at: NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)?,
    })
}

// ── Contact messages ──

pub fn create_contact_message(conn: &Connection, msg: &ContactMessage) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO contact_messages (id, name, email, subject, message, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            msg.id,
            msg.name,
            msg.email,
            msg.subject,
            msg.message,
            msg.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_contact_messages(conn: &Connection, limit: i64) -> anyhow::Result<Vec<ContactMessage>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, subject, message, created_at
         FROM contact_messages ORDER BY created_at DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        let created_at_str: String = row.get(5)?;
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
            row.get::<_, String>(4)?,
            created_at_str,
        ))
    })?;

    let mut messages = vec![];
    for row in rows {
        let (id, name, email, subject, message, created_at_str) = row?;
        messages.push(ContactMessage {
            id,
            name,
            email,
            subject,
            message,
            created_at: NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)?,
        });
    }
    Ok(messages)
}

// ── Reviews ──

pub fn create_review(conn: &Connection, review: &Review) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO reviews (id, name, rating, comment, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            review.id,
            review.name,
            review.rating,
            review.comment,
            review.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn list_reviews(conn: &Connection, limit: i64) -> anyhow::Result<Vec<Review>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, rating, comment, created_at
         FROM reviews ORDER BY created_at DESC LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        let created_at_str: String = row.get(4)?;
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, i32>(2)?,
            row.get::<_, Option<String>>(3)?,
            created_at_str,
        ))
    })?;

    let mut reviews = vec![];
    for row in rows {
        let (id, name, rating, comment, created_at_str) = row?;
        reviews.push(Review {
            id,
            name,
            rating,
            comment,
            created_at: NaiveDateTime::parse_from_str(&created_at_str, DATETIME_FMT)?,
        });
    }
    Ok(reviews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn sample_booking(id: &str, date: &str, time: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            name: "Ana Cruz".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+639171234567".to_string(),
            service: ServiceKind::NetworkSetup,
            date: NaiveDate::parse_from_str(date, DATE_FMT).unwrap(),
            time: time.to_string(),
            location: LocationKind::Office,
            address: "Minglanilla, Cebu".to_string(),
            message: None,
            tip: None,
            status,
            created_at: NaiveDateTime::parse_from_str("2025-06-16 09:00:00", DATETIME_FMT).unwrap(),
        }
    }

    #[test]
    fn test_booking_round_trip() {
        let conn = setup_db();
        let booking = sample_booking("b1", "2025-06-17", "10:00", BookingStatus::Pending);
        create_booking(&conn, &booking).unwrap();

        let loaded = get_booking_by_id(&conn, "b1").unwrap().unwrap();
        assert_eq!(loaded.service, ServiceKind::NetworkSetup);
        assert_eq!(loaded.status, BookingStatus::Pending);
        assert_eq!(loaded.time, "10:00");
        assert!(get_booking_by_id(&conn, "nope").unwrap().is_none());
    }

    #[test]
    fn test_occupied_times_filters_statuses() {
        let conn = setup_db();
        create_booking(&conn, &sample_booking("b1", "2025-06-17", "09:00", BookingStatus::Pending)).unwrap();
        create_booking(&conn, &sample_booking("b2", "2025-06-17", "11:00", BookingStatus::Confirmed)).unwrap();
        create_booking(&conn, &sample_booking("b3", "2025-06-17", "14:00", BookingStatus::Cancelled)).unwrap();
        create_booking(&conn, &sample_booking("b4", "2025-06-18", "09:00", BookingStatus::Pending)).unwrap();

        let date = NaiveDate::parse_from_str("2025-06-17", DATE_FMT).unwrap();
        let times = occupied_times_for_date(&conn, date, BookingStatus::occupying()).unwrap();
        assert_eq!(times, vec!["09:00".to_string(), "11:00".to_string()]);
    }

    #[test]
    fn test_update_booking_status() {
        let conn = setup_db();
        create_booking(&conn, &sample_booking("b1", "2025-06-17", "09:00", BookingStatus::Pending)).unwrap();

        assert!(update_booking_status(&conn, "b1", &BookingStatus::Confirmed).unwrap());
        assert!(!update_booking_status(&conn, "missing", &BookingStatus::Confirmed).unwrap());

        let loaded = get_booking_by_id(&conn, "b1").unwrap().unwrap();
        assert_eq!(loaded.status, BookingStatus::Confirmed);
    }
}
