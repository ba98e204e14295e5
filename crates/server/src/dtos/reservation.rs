use chrono::NaiveDateTime;
use database::entities::reservation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serde adapter for the `YYYY-MM-DDTHH:MM` wall-clock shape used by the
/// API and by `datetime-local` form inputs
pub mod wall_clock {
    use chrono::NaiveDateTime;
    use models::time_slot::{format_wall_clock, parse_wall_clock};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_wall_clock(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_wall_clock(&raw).map_err(Error::custom)
    }
}

/// Body of reservation creation requests; the room comes from the path
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReservationPayload {
    pub organizer_name: String,
    #[serde(with = "wall_clock")]
    #[schema(value_type = String, example = "2025-08-16T14:00")]
    pub start_time: NaiveDateTime,
    #[serde(with = "wall_clock")]
    #[schema(value_type = String, example = "2025-08-16T16:00")]
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: String,
    pub room_id: String,
    pub organizer_name: String,
    #[serde(with = "wall_clock")]
    #[schema(value_type = String, example = "2025-08-16T14:00")]
    pub start_time: NaiveDateTime,
    #[serde(with = "wall_clock")]
    #[schema(value_type = String, example = "2025-08-16T16:00")]
    pub end_time: NaiveDateTime,
}

impl From<reservation::Model> for ReservationResponse {
    fn from(reservation: reservation::Model) -> Self {
        Self {
            id: reservation.id.to_string(),
            room_id: reservation.room_id.to_string(),
            organizer_name: reservation.organizer_name,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dtos::reservation::{ReservationPayload, ReservationResponse};
    use database::entities::reservation;
    use models::time_slot::parse_wall_clock;
    use sea_orm::prelude::Uuid;
    use serde_json::json;

    #[test]
    fn test_payload_accepts_datetime_local_shape() {
        let payload: ReservationPayload = serde_json::from_value(json!({
            "organizer_name": "Juan Perez",
            "start_time": "2025-08-17T15:00",
            "end_time": "2025-08-17T16:00",
        }))
        .unwrap();

        assert_eq!(payload.organizer_name, "Juan Perez");
        assert_eq!(
            payload.start_time,
            parse_wall_clock("2025-08-17T15:00").unwrap()
        );
    }

    #[test]
    fn test_payload_accepts_seconds() {
        let payload: Result<ReservationPayload, _> = serde_json::from_value(json!({
            "organizer_name": "Juan Perez",
            "start_time": "2025-08-17T15:00:00",
            "end_time": "2025-08-17T16:00:00",
        }));
        assert!(payload.is_ok());
    }

    #[test]
    fn test_payload_rejects_bad_timestamps() {
        let payload: Result<ReservationPayload, _> = serde_json::from_value(json!({
            "organizer_name": "Juan Perez",
            "start_time": "yesterday",
            "end_time": "2025-08-17T16:00",
        }));
        assert!(payload.is_err());
    }

    #[test]
    fn test_response_renders_wall_clock_strings() {
        let model = reservation::Model {
            id: Uuid::nil(),
            room_id: Uuid::nil(),
            organizer_name: "Ana Lopez".to_owned(),
            start_time: parse_wall_clock("2025-08-17T15:00").unwrap(),
            end_time: parse_wall_clock("2025-08-17T16:00").unwrap(),
        };

        let rendered = serde_json::to_value(ReservationResponse::from(model)).unwrap();
        assert_eq!(rendered["start_time"], "2025-08-17T15:00");
        assert_eq!(rendered["end_time"], "2025-08-17T16:00");
    }
}
