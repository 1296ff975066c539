pub mod booking;
pub mod catalog;

pub use booking::{BookingDraft, BookingRequest};
