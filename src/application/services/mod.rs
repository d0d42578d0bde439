//! Application services

mod booking;
mod customer;
mod hotel;
mod room;

pub use booking::BookingService;
pub use customer::CustomerService;
pub use hotel::HotelService;
pub use room::RoomService;
