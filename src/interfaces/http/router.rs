//! API router and OpenAPI document

use std::time::Duration;

use axum::{middleware, routing::get, routing::post, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::common::{HypermediaResponse, Link};
use super::modules::{bookings, customers, health, hotels, request_id, rooms};
use super::state::ApiState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Booking API", description = "Hotels, rooms, bookings and customers"),
    paths(
        // Health
        health::health_check,
        // Hotels
        hotels::create_hotel,
        hotels::get_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        hotels::list_hotels,
        // Rooms
        rooms::create_room,
        rooms::get_room,
        rooms::update_room,
        rooms::delete_room,
        rooms::list_rooms,
        rooms::list_hotel_rooms,
        // Bookings
        bookings::create_booking,
        bookings::get_booking,
        bookings::update_booking,
        bookings::delete_booking,
        bookings::list_bookings,
        // Customers
        customers::create_customer,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        customers::list_customers,
    ),
    components(
        schemas(
            Link,
            HypermediaResponse<hotels::HotelDto>,
            HypermediaResponse<rooms::RoomDto>,
            HypermediaResponse<bookings::BookingDto>,
            HypermediaResponse<customers::CustomerDto>,
            hotels::HotelDto,
            rooms::RoomDto,
            bookings::BookingDto,
            customers::CustomerDto,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and storage reachability"),
        (name = "Hotels", description = "Hotel management"),
        (name = "Rooms", description = "Room management"),
        (name = "Bookings", description = "Booking management"),
        (name = "Customers", description = "Customer management"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full HTTP application.
///
/// Every request gets an `X-Request-Id` and a tracing span, and is
/// aborted with `408` once `request_timeout` elapses.
pub fn create_api_router(state: ApiState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/hotels",
            post(hotels::create_hotel).get(hotels::list_hotels),
        )
        .route(
            "/hotels/{id}",
            get(hotels::get_hotel)
                .put(hotels::update_hotel)
                .delete(hotels::delete_hotel),
        )
        .route("/hotels/{id}/rooms", get(rooms::list_hotel_rooms))
        .route("/rooms", post(rooms::create_room).get(rooms::list_rooms))
        .route(
            "/rooms/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .route(
            "/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .route(
            "/customers",
            post(customers::create_customer).get(customers::list_customers),
        )
        .route(
            "/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Router fixtures shared by the handler tests
#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::create_api_router;
    use crate::infrastructure::database::repositories::test_support::sqlite;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use crate::interfaces::http::state::ApiState;

    pub fn memory_app() -> Router {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        create_api_router(ApiState::new(repos), Duration::from_secs(5))
    }

    pub async fn sqlite_app() -> Router {
        let repos = Arc::new(SeaOrmRepositoryProvider::new(sqlite().await));
        create_api_router(ApiState::new(repos), Duration::from_secs(5))
    }

    /// Send one request, returning status and body text.
    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use super::test_support::{memory_app, send};
    use super::*;
    use crate::domain::{
        BookingRepository, CustomerRepository, DomainError, DomainResult, HotelRepository,
        RepositoryProvider, RoomRepository,
    };
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    /// Delegates to the in-memory store but fails every ping.
    struct Unreachable(InMemoryRepositoryProvider);

    #[async_trait]
    impl RepositoryProvider for Unreachable {
        fn hotels(&self) -> &dyn HotelRepository {
            self.0.hotels()
        }
        fn rooms(&self) -> &dyn RoomRepository {
            self.0.rooms()
        }
        fn bookings(&self) -> &dyn BookingRepository {
            self.0.bookings()
        }
        fn customers(&self) -> &dyn CustomerRepository {
            self.0.customers()
        }
        async fn ping(&self) -> DomainResult<()> {
            Err(DomainError::Storage("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(&memory_app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let health: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["database"]["status"], "ok");
    }

    #[tokio::test]
    async fn health_degrades_when_store_is_unreachable() {
        let repos = Arc::new(Unreachable(InMemoryRepositoryProvider::new()));
        let app = create_api_router(ApiState::new(repos), Duration::from_secs(5));

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let health: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(health["status"], "degraded");
    }

    #[tokio::test]
    async fn openapi_document_lists_every_resource() {
        let (status, body) = send(&memory_app(), "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_str(&body).unwrap();
        for path in [
            "/hotels",
            "/hotels/{id}",
            "/hotels/{id}/rooms",
            "/rooms/{id}",
            "/bookings/{id}",
            "/customers/{id}",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn every_response_carries_a_request_id() {
        let app = memory_app();
        let req = axum::http::Request::builder()
            .uri("/hotels")
            .body(axum::body::Body::empty())
            .unwrap();
        let resp = tower::ServiceExt::oneshot(app, req).await.unwrap();
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn envelope_shape_matches_for_every_collection() {
        let app = memory_app();
        for (collection, body) in [
            ("hotels", json!({"Name": "Grand", "Address": "1 Main St"})),
            ("rooms", json!({"HotelID": 1, "Number": "101"})),
            ("customers", json!({"FirstName": "Ada"})),
            ("bookings", json!({"RoomID": 1, "CustomerID": 1})),
        ] {
            let (status, text) = send(&app, "POST", &format!("/{}", collection), Some(body)).await;
            assert_eq!(status, StatusCode::OK, "{}", collection);
            let created: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(created["data"]["ID"], 1);
            let links: Vec<(String, String)> = created["links"]
                .as_array()
                .unwrap()
                .iter()
                .map(|l| {
                    (
                        l["type"].as_str().unwrap().to_string(),
                        l["href"].as_str().unwrap().to_string(),
                    )
                })
                .collect();
            let href = format!("/{}/1", collection);
            assert_eq!(
                links,
                [
                    ("GET".to_string(), href.clone()),
                    ("PUT".to_string(), href.clone()),
                    ("DELETE".to_string(), href),
                ]
            );
        }
    }
}
