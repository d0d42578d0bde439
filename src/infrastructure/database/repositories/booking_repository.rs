//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, error};

use super::db_err;
use crate::domain::{Booking, BookingRepository, DomainError, DomainResult};
use crate::infrastructure::database::entities::booking;

fn entity_to_domain(m: booking::Model) -> Booking {
    Booking {
        id: m.id,
        room_id: m.room_id,
        customer_id: m.customer_id,
        check_in: m.check_in,
        check_out: m.check_out,
        status: m.status,
    }
}

fn to_active_model(b: Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        id: NotSet,
        room_id: Set(b.room_id),
        customer_id: Set(b.customer_id),
        check_in: Set(b.check_in),
        check_out: Set(b.check_out),
        status: Set(b.status),
    }
}

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, b: Booking) -> DomainResult<i32> {
        let result = booking::Entity::insert(to_active_model(b))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("create_booking: INSERT INTO bookings failed: {}", e);
                db_err(e)
            })?;
        debug!("Booking created: {}", result.last_insert_id);
        Ok(result.last_insert_id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Booking> {
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("get_booking_by_id: SELECT FROM bookings failed: {}", e);
                db_err(e)
            })?;
        model
            .map(entity_to_domain)
            .ok_or_else(|| DomainError::not_found("Booking", id))
    }

    async fn update(&self, b: Booking) -> DomainResult<()> {
        let id = b.id;
        let result = booking::Entity::update_many()
            .set(to_active_model(b))
            .filter(booking::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("update_booking: UPDATE bookings failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", id));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = booking::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("delete_booking: DELETE FROM bookings failed: {}", e);
                db_err(e)
            })?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Booking", id));
        }
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find().all(&self.db).await.map_err(|e| {
            error!("get_all_bookings: SELECT FROM bookings failed: {}", e);
            db_err(e)
        })?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
