//! Hotel repository interface

use async_trait::async_trait;

use super::model::Hotel;
use crate::domain::DomainResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Inserts the hotel (its `id` is ignored) and returns the generated id.
    async fn create(&self, hotel: Hotel) -> DomainResult<i32>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Hotel>;
    /// Overwrites every column of the row identified by `hotel.id`.
    async fn update(&self, hotel: Hotel) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<Hotel>>;
}
