//! HTTP listener component

mod http;

pub use http::HttpServer;
