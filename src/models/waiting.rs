use serde::{Deserialize, Serialize};

use super::enums::WaitingStatus;

/// One row in the waiting-room queue. Created only by check-in
/// confirmation; no operation in this system updates or deletes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingEntry {
    pub id: i64,
    pub patient_id: i64,
    pub appointment_id: i64,
    pub checked_in_at: String,
    pub status: WaitingStatus,
}
