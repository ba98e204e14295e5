use database::entities::room;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub capacity: i32,
}

impl From<room::Model> for RoomResponse {
    fn from(room: room::Model) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
            capacity: room.capacity,
        }
    }
}

/// Body of room creation and update requests
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomPayload {
    pub name: String,
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use crate::dtos::room::RoomPayload;

    #[test]
    fn test_room_payload_deserialization() {
        let payload: RoomPayload =
            serde_json::from_str(r#"{"name": "Sala Norte", "capacity": 8}"#).unwrap();
        assert_eq!(payload.name, "Sala Norte");
        assert_eq!(payload.capacity, 8);
    }
}
