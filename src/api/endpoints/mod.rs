//! API endpoint handlers, one module per portal feature.

pub mod appointments;
pub mod checkin;
pub mod health;
pub mod waiting_room;
