pub mod admin;
pub mod bookings;
pub mod chat;
pub mod contact;
pub mod health;
pub mod reviews;
