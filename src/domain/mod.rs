//! Domain layer
//!
//! Entity model and the repository capability set the application
//! layer depends on. Nothing in here knows about HTTP or SQL.

pub mod booking;
pub mod customer;
pub mod hotel;
pub mod repositories;
pub mod room;

pub use booking::{Booking, BookingRepository};
pub use customer::{Customer, CustomerRepository};
pub use hotel::{Hotel, HotelRepository};
pub use repositories::RepositoryProvider;
pub use room::{Room, RoomRepository};

pub use crate::shared::errors::{DomainError, DomainResult};
