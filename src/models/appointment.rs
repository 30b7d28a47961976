use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    /// Calendar date, "YYYY-MM-DD". Lexicographic order is chronological.
    pub date: String,
    /// Time of day, "HH:MM".
    pub time: String,
    pub doctor: Option<String>,
    pub status: AppointmentStatus,
    pub checked_in_at: Option<String>,
    pub notes: Option<String>,
}

/// The appointment fields exposed over the API — both in the check-in
/// lookup response and the per-patient listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub doctor: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl From<Appointment> for AppointmentSummary {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            date: a.date,
            time: a.time,
            doctor: a.doctor,
            status: a.status,
            notes: a.notes,
        }
    }
}
