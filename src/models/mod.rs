pub mod booking;
pub mod contact;
pub mod intent;
pub mod review;
pub mod slot;

pub use booking::{Booking, BookingStatus, LocationKind, ServiceKind};
pub use contact::ContactMessage;
pub use intent::{BookingIntent, ExtractedBooking};
pub use review::Review;
pub use slot::TimeSlot;
