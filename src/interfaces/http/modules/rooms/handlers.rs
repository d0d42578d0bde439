//! Room REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::RoomDto;
use crate::domain::Room;
use crate::interfaces::http::common::{parse_id, ApiError, HypermediaResponse, JsonBody};
use crate::interfaces::http::state::ApiState;

const COLLECTION: &str = "rooms";

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "Rooms",
    request_body = RoomDto,
    responses(
        (status = 200, description = "Created", body = HypermediaResponse<RoomDto>),
        (status = 400, description = "Undecodable body", body = String, content_type = "text/plain"),
        (status = 500, description = "Unknown hotel or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_room(
    State(state): State<ApiState>,
    JsonBody(body): JsonBody<RoomDto>,
) -> Result<Json<HypermediaResponse<RoomDto>>, ApiError> {
    let mut room = Room::from(body);
    room.id = state.rooms.create(room.clone()).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, room.id, room.into())))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = HypermediaResponse<RoomDto>),
        (status = 400, description = "Invalid room ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_room(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<HypermediaResponse<RoomDto>>, ApiError> {
    let id = parse_id(&id, "room")?;
    let room = state.rooms.get(id).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, id, room.into())))
}

#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = RoomDto,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Invalid room ID or body", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn update_room(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<RoomDto>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "room")?;
    let mut room = Room::from(body);
    room.id = id;
    state.rooms.update(room).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid room ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_room(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "room")?;
    state.rooms.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_rooms(State(state): State<ApiState>) -> Result<Json<Vec<RoomDto>>, ApiError> {
    let rooms = state.rooms.list().await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}/rooms",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Rooms of the hotel", body = Vec<RoomDto>),
        (status = 400, description = "Invalid hotel ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_hotel_rooms(
    State(state): State<ApiState>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Vec<RoomDto>>, ApiError> {
    let hotel_id = parse_id(&hotel_id, "hotel")?;
    let rooms = state.rooms.list_by_hotel(hotel_id).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::interfaces::http::router::test_support::{memory_app, send, sqlite_app};

    #[tokio::test]
    async fn price_round_trips_as_a_number() {
        let app = sqlite_app().await;
        send(&app, "POST", "/hotels", Some(json!({"Name": "Grand", "Address": "1 Main St"}))).await;

        let (status, body) = send(
            &app,
            "POST",
            "/rooms",
            Some(json!({"HotelID": 1, "Number": "101", "Type": "double", "Price": 129.5})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        let created: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(created["links"][0]["href"], "/rooms/1");

        let (_, body) = send(&app, "GET", "/rooms/1", None).await;
        let fetched: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(fetched["data"]["Price"], 129.5);
        assert_eq!(fetched["data"]["Type"], "double");
    }

    #[tokio::test]
    async fn unknown_hotel_is_rejected_by_the_store() {
        let app = sqlite_app().await;
        let (status, body) = send(
            &app,
            "POST",
            "/rooms",
            Some(json!({"HotelID": 77, "Number": "1", "Type": "single", "Price": 10})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn rooms_are_listed_per_hotel() {
        let app = memory_app();
        for (hotel_id, number) in [(1, "101"), (2, "201"), (1, "102")] {
            send(
                &app,
                "POST",
                "/rooms",
                Some(json!({"HotelID": hotel_id, "Number": number})),
            )
            .await;
        }

        let (status, body) = send(&app, "GET", "/hotels/1/rooms", None).await;
        assert_eq!(status, StatusCode::OK);
        let rooms: Vec<Value> = serde_json::from_str(&body).unwrap();
        let mut numbers: Vec<_> = rooms.iter().map(|r| r["Number"].as_str().unwrap()).collect();
        numbers.sort();
        assert_eq!(numbers, ["101", "102"]);

        let (status, text) = send(&app, "GET", "/hotels/x/rooms", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, "Invalid hotel ID");
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_a_client_error() {
        let (status, _) = send(
            &memory_app(),
            "POST",
            "/rooms",
            Some(json!({"HotelID": "one"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
