use models::booking_rule::BookingRejection;
use sea_orm::DbErr;
use thiserror::Error;

/// Failures surfaced by the room and reservation services.
///
/// Everything except `Db` is an expected, recoverable outcome reported back
/// to the caller; `Db` is the only fatal category.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("a room with this name already exists")]
    DuplicateName,

    #[error("the capacity must be a positive integer")]
    InvalidCapacity,

    #[error("{0}")]
    Rejected(BookingRejection),

    #[error(transparent)]
    Db(#[from] DbErr),
}

#[cfg(test)]
mod tests {
    use crate::error::ServiceError;
    use models::booking_rule::BookingRejection;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            ServiceError::NotFound("room").to_string(),
            "room not found"
        );
        assert_eq!(
            ServiceError::DuplicateName.to_string(),
            "a room with this name already exists"
        );
        assert_eq!(
            ServiceError::Rejected(BookingRejection::RoomOccupied).to_string(),
            "the room is already occupied in this time range"
        );
    }
}
