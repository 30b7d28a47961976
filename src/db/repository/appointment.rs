use rusqlite::{params, Connection, Row};

use crate::db::repository::patient::map_patient_row;
use crate::db::DatabaseError;
use crate::models::{Appointment, AppointmentStatus, Patient};

/// Which contact field restricts identity matching. Mobile takes precedence
/// over postcode when a claim supplies both; the caller picks exactly one.
#[derive(Debug, Clone, Copy)]
pub enum ContactFilter<'a> {
    Mobile(&'a str),
    Postcode(&'a str),
}

fn map_appointment_row(row: &Row) -> rusqlite::Result<Appointment> {
    let status_raw: String = row.get(5)?;
    let status = status_raw.parse::<AppointmentStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Appointment {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        doctor: row.get(4)?,
        status,
        checked_in_at: row.get(6)?,
        notes: row.get(7)?,
    })
}

/// Insert an appointment row (status `scheduled`) and return its id.
pub fn insert_appointment(
    conn: &Connection,
    patient_id: i64,
    date: &str,
    time: &str,
    doctor: Option<&str>,
    notes: Option<&str>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (patient_id, appt_date, appt_time, doctor, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![patient_id, date, time, doctor, notes],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Appointment, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, appt_date, appt_time, doctor, status, checked_in_at, notes
         FROM appointments WHERE id = ?1",
    )?;

    stmt.query_row(params![id], map_appointment_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DatabaseError::NotFound {
                entity_type: "appointment".into(),
                id,
            },
            other => other.into(),
        })
}

/// Find the appointment on `date` for a patient whose identity tuple
/// (first name, last name, DOB) plus one contact field match exactly.
///
/// Returns the earliest appointment by time of day; among same-time ties
/// the pick is whatever the store yields first. `None` when nothing matches.
pub fn find_appointment_for_identity(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    dob: &str,
    contact: ContactFilter<'_>,
    date: &str,
) -> Result<Option<(Patient, Appointment)>, DatabaseError> {
    let contact_predicate = match contact {
        ContactFilter::Mobile(_) => "p.mobile = ?4",
        ContactFilter::Postcode(_) => "p.postcode = ?4",
    };
    let contact_value = match contact {
        ContactFilter::Mobile(v) | ContactFilter::Postcode(v) => v,
    };

    let sql = format!(
        "SELECT p.id, p.first_name, p.last_name, p.dob, p.mobile, p.postcode, p.created_at,
                a.id, a.patient_id, a.appt_date, a.appt_time, a.doctor, a.status,
                a.checked_in_at, a.notes
         FROM patients p
         JOIN appointments a ON a.patient_id = p.id
         WHERE p.first_name = ?1 AND p.last_name = ?2 AND p.dob = ?3
           AND {contact_predicate}
           AND a.appt_date = ?5
         ORDER BY a.appt_time
         LIMIT 1"
    );

    let mut stmt = conn.prepare(&sql)?;
    let result = stmt.query_row(
        params![first_name, last_name, dob, contact_value, date],
        |row| {
            let patient = map_patient_row(row)?;

            let status_raw: String = row.get(12)?;
            let status = status_raw.parse::<AppointmentStatus>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    12,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

            let appointment = Appointment {
                id: row.get(7)?,
                patient_id: row.get(8)?,
                date: row.get(9)?,
                time: row.get(10)?,
                doctor: row.get(11)?,
                status,
                checked_in_at: row.get(13)?,
                notes: row.get(14)?,
            };

            Ok((patient, appointment))
        },
    );

    match result {
        Ok(pair) => Ok(Some(pair)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All appointments for a patient with date >= `from_date`, soonest first.
pub fn list_upcoming(
    conn: &Connection,
    patient_id: i64,
    from_date: &str,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, appt_date, appt_time, doctor, status, checked_in_at, notes
         FROM appointments
         WHERE patient_id = ?1 AND appt_date >= ?2
         ORDER BY appt_date, appt_time",
    )?;

    let rows = stmt.query_map(params![patient_id, from_date], map_appointment_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Stamp an appointment as checked in. Does not check the prior status;
/// re-checking-in an already checked-in appointment is allowed.
pub fn mark_checked_in(
    conn: &Connection,
    appointment_id: i64,
    checked_in_at: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "UPDATE appointments SET status = 'checked_in', checked_in_at = ?1 WHERE id = ?2",
        params![checked_in_at, appointment_id],
    )?;
    Ok(())
}

/// Overwrite date and time and force status to `rescheduled`, whatever the
/// prior status was. Rescheduling a checked-in appointment silently discards
/// its check-in state and leaves any waiting-room entry in place.
pub fn reschedule(
    conn: &Connection,
    appointment_id: i64,
    date: &str,
    time: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "UPDATE appointments SET appt_date = ?1, appt_time = ?2, status = 'rescheduled'
         WHERE id = ?3",
        params![date, time, appointment_id],
    )?;
    Ok(())
}
