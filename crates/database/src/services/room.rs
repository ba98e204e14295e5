use crate::{entities::room, error::ServiceError};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct RoomService;

impl RoomService {
    /// All rooms, ordered by name
    pub async fn list_rooms(db: &DatabaseConnection) -> Result<Vec<room::Model>, ServiceError> {
        let rooms = room::Entity::find()
            .order_by_asc(room::Column::Name)
            .all(db)
            .await?;

        Ok(rooms)
    }

    pub async fn get_room(db: &DatabaseConnection, id: Uuid) -> Result<room::Model, ServiceError> {
        room::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("room"))
    }

    pub async fn create_room(
        db: &DatabaseConnection,
        name: String,
        capacity: i32,
    ) -> Result<room::Model, ServiceError> {
        if capacity < 1 {
            return Err(ServiceError::InvalidCapacity);
        }

        if Self::name_taken(db, &name, None).await? {
            return Err(ServiceError::DuplicateName);
        }

        let created = room::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            capacity: Set(capacity),
        }
        .insert(db)
        .await?;

        Ok(created)
    }

    pub async fn update_room(
        db: &DatabaseConnection,
        id: Uuid,
        name: String,
        capacity: i32,
    ) -> Result<room::Model, ServiceError> {
        let existing = Self::get_room(db, id).await?;

        if capacity < 1 {
            return Err(ServiceError::InvalidCapacity);
        }

        if Self::name_taken(db, &name, Some(id)).await? {
            return Err(ServiceError::DuplicateName);
        }

        let mut active: room::ActiveModel = existing.into();
        active.name = Set(name);
        active.capacity = Set(capacity);
        let updated = active.update(db).await?;

        Ok(updated)
    }

    /// Deletes a room; the foreign key cascades to its reservations, so the
    /// room and its bookings disappear together
    pub async fn delete_room(db: &DatabaseConnection, id: Uuid) -> Result<(), ServiceError> {
        let res = room::Entity::delete_by_id(id).exec(db).await?;

        if res.rows_affected == 0 {
            return Err(ServiceError::NotFound("room"));
        }

        Ok(())
    }

    /// Checks name uniqueness, optionally excluding the row being updated
    async fn name_taken(
        db: &DatabaseConnection,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ServiceError> {
        let mut query = room::Entity::find().filter(room::Column::Name.eq(name));

        if let Some(id) = exclude {
            query = query.filter(room::Column::Id.ne(id));
        }

        Ok(query.count(db).await? > 0)
    }
}
