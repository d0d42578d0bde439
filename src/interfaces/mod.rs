//! Interface layer
//!
//! External interfaces of the service: the HTTP REST API.

pub mod http;

pub use http::{create_api_router, ApiState};
