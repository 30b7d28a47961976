pub mod appointment;
pub mod patient;
pub mod waiting_room;

pub use appointment::*;
pub use patient::*;
pub use waiting_room::*;
