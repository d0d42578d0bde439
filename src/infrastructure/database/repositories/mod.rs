//! Database repository implementations
//!
//! Per-entity SeaORM repositories + unified RepositoryProvider. Every
//! operation is one independent statement: no transactions, no retries.

pub mod booking_repository;
pub mod customer_repository;
pub mod hotel_repository;
pub mod repository_provider;
pub mod room_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Shared fixtures for the repository tests
#[cfg(test)]
pub(crate) mod test_support {
    use sea_orm::DatabaseConnection;

    use crate::infrastructure::database::{DatabaseConfig, DatabasePool};

    pub async fn sqlite() -> DatabaseConnection {
        let pool = DatabasePool::start(&DatabaseConfig::sqlite_memory())
            .await
            .expect("in-memory sqlite");
        pool.connection().clone()
    }
}
