use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Room;

/// Room as it travels over the wire. `Price` is a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RoomDto {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "HotelID")]
    pub hotel_id: i32,
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Type")]
    pub room_type: String,
    #[serde(rename = "Price")]
    pub price: Decimal,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            hotel_id: r.hotel_id,
            number: r.number,
            room_type: r.room_type,
            price: r.price,
        }
    }
}

impl From<RoomDto> for Room {
    fn from(dto: RoomDto) -> Self {
        Self {
            id: dto.id,
            hotel_id: dto.hotel_id,
            number: dto.number,
            room_type: dto.room_type,
            price: dto.price,
        }
    }
}
