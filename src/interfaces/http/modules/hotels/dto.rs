//! Hotel DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Hotel;

/// Hotel as it travels over the wire.
///
/// Omitted fields decode to their zero value, unknown fields are ignored.
/// Name and address must be non-empty when creating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct HotelDto {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(rename = "Address")]
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            address: h.address,
        }
    }
}

impl From<HotelDto> for Hotel {
    fn from(dto: HotelDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            address: dto.address,
        }
    }
}
