//! # Hotel Booking Service
//!
//! CRUD service for hotels, rooms, bookings and customers over a JSON
//! HTTP API, backed by a relational store.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core entities and repository traits
//! - **application**: Use-case services over the repositories
//! - **infrastructure**: Database pool, SeaORM gateway, in-memory store, HTTP listener
//! - **interfaces**: REST API with OpenAPI documentation
//! - **server**: Lifecycle manager wiring everything together

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::{create_api_router, ApiState};
