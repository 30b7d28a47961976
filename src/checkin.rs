//! Check-in flow — identity matching against today's schedule, then the
//! confirm step that moves an appointment to `checked_in` and enqueues a
//! waiting-room entry.
//!
//! Matching is exact-equality on (first name, last name, DOB) plus one
//! contact field. When a claim supplies both mobile and postcode, only the
//! mobile is compared — the postcode is ignored entirely.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::repository::appointment::{find_appointment_for_identity, ContactFilter};
use crate::db::repository::{appointment, waiting_room};
use crate::db::DatabaseError;
use crate::models::appointment::AppointmentSummary;
use crate::models::Patient;

// ─── Types ────────────────────────────────────────────────────────────────────

/// Identity details a patient types into the kiosk. Fields default to empty
/// so missing JSON keys surface as validation errors, not parse errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckinClaim {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub postcode: String,
}

/// Successful lookup: the patient's stored identity plus the matched
/// appointment for today.
#[derive(Debug, Clone, Serialize)]
pub struct CheckinMatch {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub mobile: Option<String>,
    pub postcode: Option<String>,
    pub appointment: AppointmentSummary,
}

#[derive(Error, Debug)]
pub enum CheckinError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("No appointment found for today with these details")]
    NoAppointmentToday,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

// ─── Matching service ─────────────────────────────────────────────────────────

/// Find today's appointment for a claimed identity. Read-only.
///
/// `today` is a "YYYY-MM-DD" string supplied by the caller so the match is
/// deterministic under test; handlers pass the server-local date.
pub fn find_todays_appointment(
    conn: &Connection,
    claim: &CheckinClaim,
    today: &str,
) -> Result<CheckinMatch, CheckinError> {
    let first_name = claim.first_name.trim();
    let last_name = claim.last_name.trim();
    let dob = claim.dob.trim();
    let mobile = claim.mobile.trim();
    let postcode = claim.postcode.trim();

    if first_name.is_empty() || last_name.is_empty() || dob.is_empty() {
        return Err(CheckinError::Validation("Please provide all required fields"));
    }

    // Mobile wins when both are supplied; exactly one predicate is applied.
    let contact = if !mobile.is_empty() {
        ContactFilter::Mobile(mobile)
    } else if !postcode.is_empty() {
        ContactFilter::Postcode(postcode)
    } else {
        return Err(CheckinError::Validation("Please provide all required fields"));
    };

    let (patient, appt) =
        find_appointment_for_identity(conn, first_name, last_name, dob, contact, today)?
            .ok_or(CheckinError::NoAppointmentToday)?;

    Ok(match_result(patient, appt.into()))
}

fn match_result(patient: Patient, appointment: AppointmentSummary) -> CheckinMatch {
    CheckinMatch {
        patient_id: patient.id,
        first_name: patient.first_name,
        last_name: patient.last_name,
        dob: patient.dob,
        mobile: patient.mobile,
        postcode: patient.postcode,
        appointment,
    }
}

// ─── Check-in state machine ───────────────────────────────────────────────────

/// Confirm check-in: mark the appointment `checked_in` and enqueue a
/// waiting-room entry, both inside one transaction.
///
/// No ownership or status verification happens here — any existing
/// appointment id is accepted, and confirming twice enqueues twice.
pub fn confirm_checkin(
    conn: &mut Connection,
    patient_id: i64,
    appointment_id: i64,
    now: &str,
) -> Result<(), CheckinError> {
    let tx = conn.transaction().map_err(DatabaseError::from)?;

    appointment::mark_checked_in(&tx, appointment_id, now)?;
    waiting_room::insert_waiting_entry(&tx, patient_id, appointment_id, now)?;

    tx.commit().map_err(DatabaseError::from)?;

    tracing::debug!(patient_id, appointment_id, "check-in confirmed");
    Ok(())
}
