//! Database entities module

pub mod booking;
pub mod customer;
pub mod hotel;
pub mod room;

pub use booking::Entity as Booking;
pub use customer::Entity as Customer;
pub use hotel::Entity as Hotel;
pub use room::Entity as Room;
