#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// Not unique; several customers may share an address
    pub email: String,
    pub phone: String,
}
