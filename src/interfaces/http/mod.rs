//! HTTP REST API interfaces
//!
//! - `common`: error mapping, body extractors, hypermedia envelope
//! - `modules`: handlers and DTOs per resource, health, request id
//! - `router`: API router with OpenAPI documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::ApiState;
