//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: Customer) -> DomainResult<i32>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Customer>;
    async fn update(&self, customer: Customer) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;
}
