//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, error};

use super::db_err;
use crate::domain::{DomainError, DomainResult, Room, RoomRepository};
use crate::infrastructure::database::entities::room;

fn entity_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        hotel_id: m.hotel_id,
        number: m.number,
        room_type: m.room_type,
        price: m.price,
    }
}

fn to_active_model(r: Room) -> room::ActiveModel {
    room::ActiveModel {
        id: NotSet,
        hotel_id: Set(r.hotel_id),
        number: Set(r.number),
        room_type: Set(r.room_type),
        price: Set(r.price),
    }
}

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, r: Room) -> DomainResult<i32> {
        let result = room::Entity::insert(to_active_model(r))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("create_room: INSERT INTO rooms failed: {}", e);
                db_err(e)
            })?;
        debug!("Room created: {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Room> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("get_room_by_id: SELECT FROM rooms failed: {}", e);
                db_err(e)
            })?;
        model
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found("Room", id))
    }

    async fn update(&self, r: Room) -> DomainResult<()> {
        let id = r.id;
        let result = room::Entity::update_many()
            .set(to_active_model(r))
            .filter(room::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("update_room: UPDATE rooms failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Room", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = room::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("delete_room: DELETE FROM rooms failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Room", id));
        }
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find().all(&self.db).await.map_err(|e| {
            error!("get_all_rooms: SELECT FROM rooms failed: {}", e);
            db_err(e)
        })?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_hotel_id(&self, hotel_id: i32) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("get_rooms_by_hotel_id: SELECT FROM rooms failed: {}", e);
                db_err(e)
            })?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
