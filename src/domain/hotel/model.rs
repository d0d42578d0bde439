/// A hotel. Owns zero or more rooms through `Room::hotel_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hotel {
    /// Assigned by the store on insert, immutable afterwards
    pub id: i32,
    pub name: String,
    pub address: String,
}
