//! Booking REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::BookingDto;
use crate::domain::Booking;
use crate::interfaces::http::common::{parse_id, ApiError, HypermediaResponse, JsonBody};
use crate::interfaces::http::state::ApiState;

const COLLECTION: &str = "bookings";

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "Bookings",
    request_body = BookingDto,
    responses(
        (status = 200, description = "Created", body = HypermediaResponse<BookingDto>),
        (status = 400, description = "Undecodable body", body = String, content_type = "text/plain"),
        (status = 500, description = "Unknown room/customer or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_booking(
    State(state): State<ApiState>,
    JsonBody(body): JsonBody<BookingDto>,
) -> Result<Json<HypermediaResponse<BookingDto>>, ApiError> {
    let mut booking = Booking::from(body);
    booking.id = state.bookings.create(booking.clone()).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, booking.id, booking.into())))
}

#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = HypermediaResponse<BookingDto>),
        (status = 400, description = "Invalid booking ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_booking(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<HypermediaResponse<BookingDto>>, ApiError> {
    let id = parse_id(&id, "booking")?;
    let booking = state.bookings.get(id).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, id, booking.into())))
}

#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = BookingDto,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Invalid booking ID or body", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn update_booking(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<BookingDto>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "booking")?;
    let mut booking = Booking::from(body);
    booking.id = id;
    state.bookings.update(booking).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "Bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid booking ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_booking(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "booking")?;
    state.bookings.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_bookings(
    State(state): State<ApiState>,
) -> Result<Json<Vec<BookingDto>>, ApiError> {
    let bookings = state.bookings.list().await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::interfaces::http::router::test_support::{send, sqlite_app};

    #[tokio::test]
    async fn booking_across_all_parents() {
        let app = sqlite_app().await;
        send(&app, "POST", "/hotels", Some(json!({"Name": "Grand", "Address": "1 Main St"}))).await;
        send(&app, "POST", "/rooms", Some(json!({"HotelID": 1, "Number": "101"}))).await;
        send(
            &app,
            "POST",
            "/customers",
            Some(json!({"FirstName": "Ada", "LastName": "Lovelace", "Email": "ada@example.com"})),
        )
        .await;

        // dates are stored verbatim, even backwards ones
        let (status, body) = send(
            &app,
            "POST",
            "/bookings",
            Some(json!({
                "RoomID": 1,
                "CustomerID": 1,
                "CheckIn": "2024-05-10",
                "CheckOut": "2024-05-01",
                "Status": "confirmed"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        let created: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(created["data"]["ID"], 1);
        assert_eq!(created["data"]["CheckOut"], "2024-05-01");

        let (status, _) = send(
            &app,
            "PUT",
            "/bookings/1",
            Some(json!({"RoomID": 1, "CustomerID": 1, "Status": "cancelled"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", "/bookings/1", None).await;
        let fetched: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(fetched["data"]["Status"], "cancelled");
        assert_eq!(fetched["data"]["CheckIn"], "");
    }

    #[tokio::test]
    async fn bad_id_and_bad_body_are_client_errors() {
        let app = sqlite_app().await;

        let (status, text) = send(&app, "DELETE", "/bookings/1.5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, "Invalid booking ID");

        let (status, _) = send(&app, "POST", "/bookings", Some(json!("not a booking"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
