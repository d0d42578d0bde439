//! Customer HTTP module

pub mod dto;
pub mod handlers;

pub use dto::CustomerDto;
pub use handlers::*;
