pub mod health;
pub mod reservation;
pub mod room;
pub mod ui;
