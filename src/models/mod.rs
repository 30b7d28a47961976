pub mod appointment;
pub mod enums;
pub mod patient;
pub mod waiting;

pub use appointment::{Appointment, AppointmentSummary};
pub use enums::{AppointmentStatus, WaitingStatus};
pub use patient::Patient;
pub use waiting::WaitingEntry;
