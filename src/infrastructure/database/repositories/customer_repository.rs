//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, error};

use super::db_err;
use crate::domain::{Customer, CustomerRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::customer;

fn entity_to_domain(m: customer::Model) -> Customer {
    Customer {
        id: m.id,
        first_name: m.first_name,
        last_name: m.last_name,
        email: m.email,
        phone: m.phone,
    }
}

fn to_active_model(c: Customer) -> customer::ActiveModel {
    customer::ActiveModel {
        id: NotSet,
        first_name: Set(c.first_name),
        last_name: Set(c.last_name),
        email: Set(c.email),
        phone: Set(c.phone),
    }
}

pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn create(&self, c: Customer) -> DomainResult<i32> {
        let result = customer::Entity::insert(to_active_model(c))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("create_customer: INSERT INTO customers failed: {}", e);
                db_err(e)
            })?;
        debug!("Customer created: {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Customer> {
        let model = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("get_customer_by_id: SELECT FROM customers failed: {}", e);
                db_err(e)
            })?;
        model
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found("Customer", id))
    }

    async fn update(&self, c: Customer) -> DomainResult<()> {
        let id = c.id;
        let result = customer::Entity::update_many()
            .set(to_active_model(c))
            .filter(customer::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("update_customer: UPDATE customers failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Customer", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("delete_customer: DELETE FROM customers failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Customer", id));
        }
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let models = customer::Entity::find().all(&self.db).await.map_err(|e| {
            error!("get_all_customers: SELECT FROM customers failed: {}", e);
            db_err(e)
        })?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
