//! Booking HTTP module

pub mod dto;
pub mod handlers;

pub use dto::BookingDto;
pub use handlers::*;
