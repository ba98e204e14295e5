use crate::{
    entities::{reservation, room},
    error::ServiceError,
};
use chrono::NaiveDateTime;
use models::{booking_rule, time_slot::TimeSlot};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IsolationLevel, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

pub struct ReservationService;

impl ReservationService {
    /// Validates a candidate slot and persists it in a single serializable
    /// transaction, so the overlap check and the insert cannot be separated
    /// by a concurrent submission for the same room.
    pub async fn create_reservation(
        db: &DatabaseConnection,
        room_id: Uuid,
        organizer_name: String,
        slot: TimeSlot,
    ) -> Result<reservation::Model, ServiceError> {
        let txn = db
            .begin_with_config(Some(IsolationLevel::Serializable), None)
            .await?;

        if room::Entity::find_by_id(room_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(ServiceError::NotFound("room"));
        }

        // Half-open range query: existing.start < new.end AND existing.end > new.start
        let taken: Vec<TimeSlot> = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::StartTime.lt(slot.end))
            .filter(reservation::Column::EndTime.gt(slot.start))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| TimeSlot::new(r.start_time, r.end_time))
            .collect();

        if let Err(rejection) = booking_rule::validate_slot(&slot, &taken) {
            txn.rollback().await?;
            return Err(ServiceError::Rejected(rejection));
        }

        let created = reservation::ActiveModel {
            id: Set(Uuid::new_v4()),
            room_id: Set(room_id),
            organizer_name: Set(organizer_name),
            start_time: Set(slot.start),
            end_time: Set(slot.end),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Reservations for a room that have not yet ended, soonest first.
    /// `now` is evaluated by the caller at request time, on the same
    /// wall-clock basis as the stored timestamps.
    pub async fn list_future_for_room(
        db: &DatabaseConnection,
        room_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<reservation::Model>, ServiceError> {
        if room::Entity::find_by_id(room_id).one(db).await?.is_none() {
            return Err(ServiceError::NotFound("room"));
        }

        let upcoming = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::EndTime.gte(now))
            .order_by_asc(reservation::Column::StartTime)
            .all(db)
            .await?;

        Ok(upcoming)
    }

    pub async fn get_reservation(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<reservation::Model, ServiceError> {
        reservation::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("reservation"))
    }

    pub async fn delete_reservation(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let res = reservation::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(ServiceError::NotFound("reservation"));
        }

        Ok(())
    }
}
