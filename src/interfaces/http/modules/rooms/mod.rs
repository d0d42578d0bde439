//! Room HTTP module

pub mod dto;
pub mod handlers;

pub use dto::RoomDto;
pub use handlers::*;
