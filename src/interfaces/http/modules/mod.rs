pub mod bookings;
pub mod customers;
pub mod health;
pub mod hotels;
pub mod request_id;
pub mod rooms;
