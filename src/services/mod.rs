pub mod ai;
pub mod booking;
pub mod calendar;
pub mod chat;
pub mod clock;
pub mod knowledge;
pub mod notify;
pub mod service_area;
