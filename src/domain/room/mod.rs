//! Room aggregate

pub mod model;
pub mod repository;

pub use model::Room;
pub use repository::RoomRepository;
