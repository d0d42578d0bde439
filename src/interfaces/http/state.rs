//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;

use crate::application::{BookingService, CustomerService, HotelService, RoomService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::modules::health::HealthState;

/// State handed to every route. Handlers extract it whole; the health
/// check gets its own slice through `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub hotels: Arc<HotelService>,
    pub rooms: Arc<RoomService>,
    pub bookings: Arc<BookingService>,
    pub customers: Arc<CustomerService>,
    pub repos: Arc<dyn RepositoryProvider>,
    pub started_at: Arc<Instant>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            hotels: Arc::new(HotelService::new(Arc::clone(&repos))),
            rooms: Arc::new(RoomService::new(Arc::clone(&repos))),
            bookings: Arc::new(BookingService::new(Arc::clone(&repos))),
            customers: Arc::new(CustomerService::new(Arc::clone(&repos))),
            repos,
            started_at: Arc::new(Instant::now()),
        }
    }
}

impl FromRef<ApiState> for HealthState {
    fn from_ref(s: &ApiState) -> Self {
        HealthState {
            repos: Arc::clone(&s.repos),
            started_at: Arc::clone(&s.started_at),
        }
    }
}
