//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: Booking) -> DomainResult<i32>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Booking>;
    async fn update(&self, booking: Booking) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;
}
