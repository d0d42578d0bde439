//! SeaORM implementation of RepositoryProvider

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::domain::{
    BookingRepository, CustomerRepository, DomainError, DomainResult, HotelRepository,
    RepositoryProvider, RoomRepository,
};

use super::booking_repository::SeaOrmBookingRepository;
use super::customer_repository::SeaOrmCustomerRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::room_repository::SeaOrmRoomRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-entity repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let hotel = repos.hotels().find_by_id(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    hotels: SeaOrmHotelRepository,
    rooms: SeaOrmRoomRepository,
    bookings: SeaOrmBookingRepository,
    customers: SeaOrmCustomerRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hotels: SeaOrmHotelRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            customers: SeaOrmCustomerRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn customers(&self) -> &dyn CustomerRepository {
        &self.customers
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::sqlite;

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let repos = SeaOrmRepositoryProvider::new(sqlite().await);
        repos.ping().await.unwrap();
    }

    #[tokio::test]
    async fn ping_fails_after_pool_is_closed() {
        let db = sqlite().await;
        let repos = SeaOrmRepositoryProvider::new(db.clone());

        db.close().await.unwrap();

        assert!(matches!(repos.ping().await, Err(DomainError::Storage(_))));
    }
}
