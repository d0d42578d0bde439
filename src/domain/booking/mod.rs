//! Booking aggregate

pub mod model;
pub mod repository;

pub use model::Booking;
pub use repository::BookingRepository;
