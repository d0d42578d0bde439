//! Room repository interface

use async_trait::async_trait;

use super::model::Room;
use crate::domain::DomainResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: Room) -> DomainResult<i32>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Room>;
    async fn update(&self, room: Room) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<Room>>;
    async fn find_by_hotel_id(&self, hotel_id: i32) -> DomainResult<Vec<Room>>;
}
