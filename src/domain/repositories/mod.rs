//! Repository capability set for the domain layer
//!
//! `RepositoryProvider` gives unified access to the per-entity
//! repositories. Services depend on `Arc<dyn RepositoryProvider>` only,
//! so the relational gateway and the in-memory double are
//! interchangeable.

use async_trait::async_trait;

use super::booking::BookingRepository;
use super::customer::CustomerRepository;
use super::hotel::HotelRepository;
use super::room::RoomRepository;
use crate::shared::errors::DomainResult;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let hotel = repos.hotels().find_by_id(1).await?;
///     let rooms = repos.rooms().find_by_hotel_id(hotel.id).await?;
/// }
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn hotels(&self) -> &dyn HotelRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn customers(&self) -> &dyn CustomerRepository;

    /// Round-trips to the backing store.
    async fn ping(&self) -> DomainResult<()>;
}
