//! Room use cases

use std::sync::Arc;

use tracing::error;

use crate::domain::{DomainResult, RepositoryProvider, Room};

/// Service for room operations
pub struct RoomService {
    repos: Arc<dyn RepositoryProvider>,
}

impl RoomService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, room: Room) -> DomainResult<i32> {
        let hotel_id = room.hotel_id;
        self.repos
            .rooms()
            .create(room)
            .await
            .inspect_err(|e| error!(hotel_id, error = %e, "failed to create room"))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Room> {
        self.repos
            .rooms()
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(room_id = id, error = %e, "failed to get room by id"))
    }

    pub async fn update(&self, room: Room) -> DomainResult<()> {
        let id = room.id;
        self.repos
            .rooms()
            .update(room)
            .await
            .inspect_err(|e| error!(room_id = id, error = %e, "failed to update room"))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos
            .rooms()
            .delete(id)
            .await
            .inspect_err(|e| error!(room_id = id, error = %e, "failed to delete room"))
    }

    pub async fn list(&self) -> DomainResult<Vec<Room>> {
        self.repos
            .rooms()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "failed to list rooms"))
    }

    pub async fn list_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Room>> {
        self.repos
            .rooms()
            .find_by_hotel_id(hotel_id)
            .await
            .inspect_err(|e| error!(hotel_id, error = %e, "failed to list rooms of hotel"))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    #[tokio::test]
    async fn concurrent_creates_stay_partitioned_by_hotel() {
        let service = Arc::new(RoomService::new(Arc::new(InMemoryRepositoryProvider::new())));

        let mut tasks = Vec::new();
        for hotel_id in 1..=3 {
            for n in 0..10 {
                let service = service.clone();
                tasks.push(tokio::spawn(async move {
                    service
                        .create(Room {
                            id: 0,
                            hotel_id,
                            number: format!("{}{:02}", hotel_id, n),
                            room_type: "single".into(),
                            price: Decimal::from(50 + n),
                        })
                        .await
                        .unwrap()
                }));
            }
        }
        for task in tasks {
            task.await.unwrap();
        }

        for hotel_id in 1..=3 {
            let rooms = service.list_by_hotel(hotel_id).await.unwrap();
            assert_eq!(rooms.len(), 10);
            assert!(rooms.iter().all(|r| r.hotel_id == hotel_id));
        }
        assert_eq!(service.list().await.unwrap().len(), 30);
    }

    #[tokio::test]
    async fn update_then_get_reflects_exactly_the_new_fields() {
        let service = RoomService::new(Arc::new(InMemoryRepositoryProvider::new()));
        let id = service
            .create(Room {
                id: 0,
                hotel_id: 1,
                number: "101".into(),
                room_type: "single".into(),
                price: Decimal::from(80),
            })
            .await
            .unwrap();

        let replacement = Room {
            id,
            hotel_id: 2,
            number: "201".into(),
            room_type: "suite".into(),
            price: Decimal::new(19999, 2),
        };
        service.update(replacement.clone()).await.unwrap();

        assert_eq!(service.get(id).await.unwrap(), replacement);
    }
}
