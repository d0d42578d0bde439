//! Hotel use cases

use std::sync::Arc;

use tracing::error;

use crate::domain::{DomainResult, Hotel, RepositoryProvider};

/// Service for hotel operations
pub struct HotelService {
    repos: Arc<dyn RepositoryProvider>,
}

impl HotelService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, hotel: Hotel) -> DomainResult<i32> {
        self.repos
            .hotels()
            .create(hotel)
            .await
            .inspect_err(|e| error!(error = %e, "failed to create hotel"))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Hotel> {
        self.repos
            .hotels()
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(hotel_id = id, error = %e, "failed to get hotel by id"))
    }

    pub async fn update(&self, hotel: Hotel) -> DomainResult<()> {
        let id = hotel.id;
        self.repos
            .hotels()
            .update(hotel)
            .await
            .inspect_err(|e| error!(hotel_id = id, error = %e, "failed to update hotel"))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos
            .hotels()
            .delete(id)
            .await
            .inspect_err(|e| error!(hotel_id = id, error = %e, "failed to delete hotel"))
    }

    pub async fn list(&self) -> DomainResult<Vec<Hotel>> {
        self.repos
            .hotels()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "failed to list hotels"))
    }
}
