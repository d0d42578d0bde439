//! Common HTTP types shared by every resource module

pub mod error;
pub mod hypermedia;
pub mod json_body;
pub mod path;
pub mod validated_json;

pub use error::ApiError;
pub use hypermedia::{resource_links, HypermediaResponse, Link};
pub use json_body::JsonBody;
pub use path::parse_id;
pub use validated_json::ValidatedJson;
