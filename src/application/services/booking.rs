//! Booking use cases
//!
//! No overlap or availability check happens here yet; two bookings of
//! the same room for the same nights are both accepted.

use std::sync::Arc;

use tracing::error;

use crate::domain::{Booking, DomainResult, RepositoryProvider};

/// Service for booking operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, booking: Booking) -> DomainResult<i32> {
        let (room_id, customer_id) = (booking.room_id, booking.customer_id);
        self.repos
            .bookings()
            .create(booking)
            .await
            .inspect_err(|e| error!(room_id, customer_id, error = %e, "failed to create booking"))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(booking_id = id, error = %e, "failed to get booking by id"))
    }

    pub async fn update(&self, booking: Booking) -> DomainResult<()> {
        let id = booking.id;
        self.repos
            .bookings()
            .update(booking)
            .await
            .inspect_err(|e| error!(booking_id = id, error = %e, "failed to update booking"))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos
            .bookings()
            .delete(id)
            .await
            .inspect_err(|e| error!(booking_id = id, error = %e, "failed to delete booking"))
    }

    pub async fn list(&self) -> DomainResult<Vec<Booking>> {
        self.repos
            .bookings()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "failed to list bookings"))
    }
}
