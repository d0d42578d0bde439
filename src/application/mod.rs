//! Application layer - use cases
//!
//! Thin services between the HTTP handlers and the repositories. They are
//! the place where business rules (availability checks, notifications)
//! would go; today they only log failures and pass results through.

pub mod services;

pub use services::{BookingService, CustomerService, HotelService, RoomService};
