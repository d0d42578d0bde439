/// A reservation of one room by one customer.
///
/// Dates and status are stored as given: no format, ordering or
/// availability checks happen anywhere in the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub customer_id: i32,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
}
