//! SeaORM implementation of HotelRepository

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, error};

use super::db_err;
use crate::domain::{DomainError, DomainResult, Hotel, HotelRepository};
use crate::infrastructure::database::entities::hotel;

fn entity_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        address: m.address,
    }
}

fn to_active_model(h: Hotel) -> hotel::ActiveModel {
    hotel::ActiveModel {
        id: NotSet,
        name: Set(h.name),
        address: Set(h.address),
    }
}

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn create(&self, h: Hotel) -> DomainResult<i32> {
        let result = hotel::Entity::insert(to_active_model(h))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("create_hotel: INSERT INTO hotels failed: {}", e);
                db_err(e)
            })?;
        debug!("Hotel created: {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Hotel> {
        let model = hotel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("get_hotel_by_id: SELECT FROM hotels failed: {}", e);
                db_err(e)
            })?;
        model
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found("Hotel", id))
    }

    async fn update(&self, h: Hotel) -> DomainResult<()> {
        let id = h.id;
        let result = hotel::Entity::update_many()
            .set(to_active_model(h))
            .filter(hotel::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("update_hotel: UPDATE hotels failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Hotel", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = hotel::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("delete_hotel: DELETE FROM hotels failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Hotel", id));
        }
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Hotel>> {
        let models = hotel::Entity::find().all(&self.db).await.map_err(|e| {
            error!("get_all_hotels: SELECT FROM hotels failed: {}", e);
            db_err(e)
        })?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::sqlite;

    fn grand() -> Hotel {
        Hotel {
            id: 0,
            name: "Grand".into(),
            address: "1 Main St".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_input_with_assigned_id() {
        let repo = SeaOrmHotelRepository::new(sqlite().await);

        let id = repo.create(grand()).await.unwrap();
        let stored = repo.find_by_id(id).await.unwrap();

        assert_eq!(stored, Hotel { id, ..grand() });
    }

    #[tokio::test]
    async fn update_overwrites_every_column() {
        let repo = SeaOrmHotelRepository::new(sqlite().await);
        let id = repo.create(grand()).await.unwrap();

        repo.update(Hotel {
            id,
            name: "Grand Plaza".into(),
            address: String::new(),
        })
        .await
        .unwrap();

        let stored = repo.find_by_id(id).await.unwrap();
        assert_eq!(stored.name, "Grand Plaza");
        assert_eq!(stored.address, "");
    }

    #[tokio::test]
    async fn missing_rows_surface_not_found() {
        let repo = SeaOrmHotelRepository::new(sqlite().await);

        assert!(repo.find_by_id(404).await.unwrap_err().is_not_found());
        assert!(repo
            .update(Hotel { id: 404, ..grand() })
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete(404).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_then_get_fails() {
        let repo = SeaOrmHotelRepository::new(sqlite().await);
        let id = repo.create(grand()).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.find_by_id(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn find_all_returns_every_created_hotel() {
        let repo = SeaOrmHotelRepository::new(sqlite().await);
        let mut ids = Vec::new();
        for i in 0..3 {
            let id = repo
                .create(Hotel {
                    id: 0,
                    name: format!("Hotel {}", i),
                    address: format!("{} Main St", i),
                })
                .await
                .unwrap();
            ids.push(id);
        }

        let mut listed: Vec<i32> = repo.find_all().await.unwrap().iter().map(|h| h.id).collect();
        listed.sort();
        ids.sort();
        assert_eq!(listed, ids);
    }
}
