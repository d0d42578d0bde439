//! Customer use cases

use std::sync::Arc;

use tracing::error;

use crate::domain::{Customer, DomainResult, RepositoryProvider};

/// Service for customer operations
pub struct CustomerService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CustomerService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn create(&self, customer: Customer) -> DomainResult<i32> {
        self.repos
            .customers()
            .create(customer)
            .await
            .inspect_err(|e| error!(error = %e, "failed to create customer"))
    }

    pub async fn get(&self, id: i32) -> DomainResult<Customer> {
        self.repos
            .customers()
            .find_by_id(id)
            .await
            .inspect_err(|e| error!(customer_id = id, error = %e, "failed to get customer by id"))
    }

    pub async fn update(&self, customer: Customer) -> DomainResult<()> {
        let id = customer.id;
        self.repos
            .customers()
            .update(customer)
            .await
            .inspect_err(|e| error!(customer_id = id, error = %e, "failed to update customer"))
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos
            .customers()
            .delete(id)
            .await
            .inspect_err(|e| error!(customer_id = id, error = %e, "failed to delete customer"))
    }

    pub async fn list(&self) -> DomainResult<Vec<Customer>> {
        self.repos
            .customers()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "failed to list customers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn grace() -> Customer {
        Customer {
            id: 0,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn update_then_get_reflects_exactly_the_new_fields() {
        let service = service();
        let id = service.create(grace()).await.unwrap();

        let updated = Customer {
            id,
            last_name: "Murray".into(),
            phone: String::new(),
            ..grace()
        };
        service.update(updated.clone()).await.unwrap();

        assert_eq!(service.get(id).await.unwrap(), updated);
        assert_eq!(service.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_of_unknown_customer_is_not_found() {
        let err = service()
            .update(Customer { id: 5, ..grace() })
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("Customer", 5));
    }
}
