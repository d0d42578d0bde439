//! Infrastructure layer - external concerns

pub mod database;
pub mod server;
pub mod storage;

pub use database::{init_database, DatabaseConfig, DatabasePool, SeaOrmRepositoryProvider};
pub use server::HttpServer;
pub use storage::InMemoryRepositoryProvider;
