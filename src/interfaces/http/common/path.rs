//! Path parameter parsing

use super::ApiError;

/// Parse a path id. `entity` names the resource in the error, so a bad
/// hotel id is rejected with `Invalid hotel ID`.
pub fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {} ID", entity)))
}
