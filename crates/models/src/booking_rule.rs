use crate::time_slot::TimeSlot;
use chrono::Duration;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The longest span a single reservation may cover, in hours
pub const MAX_RESERVATION_HOURS: i64 = 2;

/// Why a candidate reservation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingRejection {
    /// The slot ends at or before it starts
    EndNotAfterStart,
    /// The slot is longer than [`MAX_RESERVATION_HOURS`]
    ExceedsMaxDuration,
    /// The slot intersects an existing reservation for the same room
    RoomOccupied,
}

impl Display for BookingRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EndNotAfterStart => write!(f, "the end time must be after the start time"),
            Self::ExceedsMaxDuration => write!(
                f,
                "the reservation cannot exceed {MAX_RESERVATION_HOURS} hours"
            ),
            Self::RoomOccupied => write!(f, "the room is already occupied in this time range"),
        }
    }
}

/// Decides whether a candidate slot may be persisted, given the room's
/// current reservations. Read-only; the caller persists only on `Ok`.
///
/// The checks run in a fixed order so a candidate violating several rules
/// always surfaces the same reason first: end-before-start, then duration,
/// then overlap.
pub fn validate_slot(candidate: &TimeSlot, existing: &[TimeSlot]) -> Result<(), BookingRejection> {
    if candidate.start >= candidate.end {
        return Err(BookingRejection::EndNotAfterStart);
    }

    if candidate.duration() > Duration::hours(MAX_RESERVATION_HOURS) {
        return Err(BookingRejection::ExceedsMaxDuration);
    }

    if existing.iter().any(|taken| taken.overlaps(candidate)) {
        return Err(BookingRejection::RoomOccupied);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        booking_rule::{BookingRejection, validate_slot},
        time_slot::{TimeSlot, parse_wall_clock},
    };

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(
            parse_wall_clock(start).unwrap(),
            parse_wall_clock(end).unwrap(),
        )
    }

    #[test]
    fn test_valid_slot_in_free_time() {
        let existing = [slot("2025-08-17T15:00", "2025-08-17T16:00")];
        let candidate = slot("2025-08-17T17:00", "2025-08-17T18:00");
        assert_eq!(validate_slot(&candidate, &existing), Ok(()));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let candidate = slot("2025-08-17T13:00", "2025-08-17T12:00");
        assert_eq!(
            validate_slot(&candidate, &[]),
            Err(BookingRejection::EndNotAfterStart)
        );
    }

    #[test]
    fn test_zero_length_slot_rejected() {
        let candidate = slot("2025-08-17T13:00", "2025-08-17T13:00");
        assert_eq!(
            validate_slot(&candidate, &[]),
            Err(BookingRejection::EndNotAfterStart)
        );
    }

    #[test]
    fn test_over_two_hours_rejected() {
        let candidate = slot("2025-08-17T10:00", "2025-08-17T12:01");
        assert_eq!(
            validate_slot(&candidate, &[]),
            Err(BookingRejection::ExceedsMaxDuration)
        );
    }

    #[test]
    fn test_exactly_two_hours_accepted() {
        let candidate = slot("2025-08-17T10:00", "2025-08-17T12:00");
        assert_eq!(validate_slot(&candidate, &[]), Ok(()));
    }

    #[test]
    fn test_overlap_rejected() {
        let existing = [slot("2025-08-17T15:00", "2025-08-17T16:00")];

        // Partial overlap, containment, and the identical interval
        for candidate in [
            slot("2025-08-17T15:30", "2025-08-17T16:30"),
            slot("2025-08-17T15:15", "2025-08-17T15:45"),
            slot("2025-08-17T15:00", "2025-08-17T16:00"),
        ] {
            assert_eq!(
                validate_slot(&candidate, &existing),
                Err(BookingRejection::RoomOccupied)
            );
        }
    }

    #[test]
    fn test_touching_endpoint_accepted() {
        let existing = [slot("2025-08-17T15:00", "2025-08-17T16:00")];
        let candidate = slot("2025-08-17T16:00", "2025-08-17T17:00");
        assert_eq!(validate_slot(&candidate, &existing), Ok(()));
    }

    #[test]
    fn test_end_before_start_wins_over_other_violations() {
        // Inverted slot that would also be over two hours and overlapping
        let existing = [slot("2025-08-17T10:00", "2025-08-17T12:00")];
        let candidate = slot("2025-08-17T18:00", "2025-08-17T09:00");
        assert_eq!(
            validate_slot(&candidate, &existing),
            Err(BookingRejection::EndNotAfterStart)
        );
    }

    #[test]
    fn test_duration_checked_before_overlap() {
        let existing = [slot("2025-08-17T15:00", "2025-08-17T16:00")];
        let candidate = slot("2025-08-17T14:00", "2025-08-17T16:30");
        assert_eq!(
            validate_slot(&candidate, &existing),
            Err(BookingRejection::ExceedsMaxDuration)
        );
    }

    #[test]
    fn test_booking_scenario() {
        // Room with an existing 15:00-16:00 reservation
        let existing = [slot("2025-08-17T15:00", "2025-08-17T16:00")];

        assert_eq!(
            validate_slot(&slot("2025-08-17T15:30", "2025-08-17T16:30"), &existing),
            Err(BookingRejection::RoomOccupied)
        );
        assert_eq!(
            validate_slot(&slot("2025-08-17T16:00", "2025-08-17T17:00"), &existing),
            Ok(())
        );
        assert_eq!(
            validate_slot(&slot("2025-08-17T14:00", "2025-08-17T16:30"), &existing),
            Err(BookingRejection::ExceedsMaxDuration)
        );
        assert_eq!(
            validate_slot(&slot("2025-08-17T13:00", "2025-08-17T12:00"), &existing),
            Err(BookingRejection::EndNotAfterStart)
        );
    }

    #[test]
    fn test_rejection_reason_strings() {
        assert_eq!(
            BookingRejection::EndNotAfterStart.to_string(),
            "the end time must be after the start time"
        );
        assert_eq!(
            BookingRejection::ExceedsMaxDuration.to_string(),
            "the reservation cannot exceed 2 hours"
        );
        assert_eq!(
            BookingRejection::RoomOccupied.to_string(),
            "the room is already occupied in this time range"
        );
    }
}
