pub mod booking_rule;
pub mod time_slot;
