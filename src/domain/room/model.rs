use rust_decimal::Decimal;

/// A bookable room of a hotel.
///
/// `hotel_id` is a foreign key; its existence is checked by the store,
/// not by this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub number: String,
    pub room_type: String,
    pub price: Decimal,
}
