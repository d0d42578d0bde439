//! Hotel REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::HotelDto;
use crate::domain::Hotel;
use crate::interfaces::http::common::{
    parse_id, ApiError, HypermediaResponse, JsonBody, ValidatedJson,
};
use crate::interfaces::http::state::ApiState;

const COLLECTION: &str = "hotels";

#[utoipa::path(
    post,
    path = "/hotels",
    tag = "Hotels",
    request_body = HotelDto,
    responses(
        (status = 200, description = "Created", body = HypermediaResponse<HotelDto>),
        (status = 400, description = "Undecodable body or missing name/address", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_hotel(
    State(state): State<ApiState>,
    ValidatedJson(body): ValidatedJson<HotelDto>,
) -> Result<Json<HypermediaResponse<HotelDto>>, ApiError> {
    let mut hotel = Hotel::from(body);
    hotel.id = state.hotels.create(hotel.clone()).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, hotel.id, hotel.into())))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = HypermediaResponse<HotelDto>),
        (status = 400, description = "Invalid hotel ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_hotel(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<HypermediaResponse<HotelDto>>, ApiError> {
    let id = parse_id(&id, "hotel")?;
    let hotel = state.hotels.get(id).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, id, hotel.into())))
}

#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelDto,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Invalid hotel ID or body", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn update_hotel(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<HotelDto>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "hotel")?;
    let mut hotel = Hotel::from(body);
    hotel.id = id;
    state.hotels.update(hotel).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid hotel ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_hotel(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "hotel")?;
    state.hotels.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/hotels",
    tag = "Hotels",
    responses(
        (status = 200, description = "All hotels", body = Vec<HotelDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_hotels(State(state): State<ApiState>) -> Result<Json<Vec<HotelDto>>, ApiError> {
    let hotels = state.hotels.list().await?;
    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}
