use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Booking;

/// Booking as it travels over the wire. Dates and status are opaque
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookingDto {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "RoomID")]
    pub room_id: i32,
    #[serde(rename = "CustomerID")]
    pub customer_id: i32,
    #[serde(rename = "CheckIn")]
    pub check_in: String,
    #[serde(rename = "CheckOut")]
    pub check_out: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            room_id: b.room_id,
            customer_id: b.customer_id,
            check_in: b.check_in,
            check_out: b.check_out,
            status: b.status,
        }
    }
}

impl From<BookingDto> for Booking {
    fn from(dto: BookingDto) -> Self {
        Self {
            id: dto.id,
            room_id: dto.room_id,
            customer_id: dto.customer_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            status: dto.status,
        }
    }
}
