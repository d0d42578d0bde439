//! Hotel HTTP module

pub mod dto;
pub mod handlers;

pub use dto::HotelDto;
pub use handlers::*;
