use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::db::DatabaseError;
use crate::models::WaitingStatus;

/// Staff-facing view of one queue entry, joined with patient and appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingRoomRow {
    pub id: i64,
    pub patient_name: String,
    pub checked_in_at: String,
    pub status: WaitingStatus,
    pub doctor: Option<String>,
    pub appt_time: String,
}

/// Insert a queue entry (status `waiting`) and return its id.
pub fn insert_waiting_entry(
    conn: &Connection,
    patient_id: i64,
    appointment_id: i64,
    checked_in_at: &str,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO waiting_room (patient_id, appointment_id, checked_in_at)
         VALUES (?1, ?2, ?3)",
        params![patient_id, appointment_id, checked_in_at],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All entries still in `waiting` status, FIFO by check-in time.
/// Entries whose status an operator changed by hand are skipped.
pub fn list_waiting(conn: &Connection) -> Result<Vec<WaitingRoomRow>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT w.id, p.first_name, p.last_name, w.checked_in_at, w.status,
                a.doctor, a.appt_time
         FROM waiting_room w
         JOIN patients p ON w.patient_id = p.id
         JOIN appointments a ON w.appointment_id = a.id
         WHERE w.status = 'waiting'
         ORDER BY w.checked_in_at",
    )?;

    let rows = stmt.query_map([], |row| {
        let first: String = row.get(1)?;
        let last: String = row.get(2)?;
        let status_raw: String = row.get(4)?;

        Ok(WaitingRoomRow {
            id: row.get(0)?,
            patient_name: format!("{first} {last}"),
            checked_in_at: row.get(3)?,
            status: WaitingStatus::from_db(&status_raw),
            doctor: row.get(5)?,
            appt_time: row.get(6)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::repository::appointment::insert_appointment;
    use crate::db::repository::patient::insert_patient;

    fn seed_checked_in(conn: &Connection, first: &str, last: &str, at: &str) -> i64 {
        let pid = insert_patient(conn, first, last, "1980-01-01", Some("07000"), None).unwrap();
        let aid =
            insert_appointment(conn, pid, "2026-08-29", "09:00", Some("Dr. Chen"), None).unwrap();
        insert_waiting_entry(conn, pid, aid, at).unwrap()
    }

    #[test]
    fn list_is_fifo_by_checkin_time() {
        let conn = open_memory_database().unwrap();
        seed_checked_in(&conn, "Jane", "Smith", "2026-08-29T09:30:00+00:00");
        seed_checked_in(&conn, "John", "Doe", "2026-08-29T08:45:00+00:00");
        seed_checked_in(&conn, "Emily", "Brown", "2026-08-29T10:00:00+00:00");

        let queue = list_waiting(&conn).unwrap();
        let names: Vec<&str> = queue.iter().map(|r| r.patient_name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Emily Brown"]);
    }

    #[test]
    fn list_contains_only_waiting_entries() {
        let conn = open_memory_database().unwrap();
        let id = seed_checked_in(&conn, "John", "Doe", "2026-08-29T08:45:00+00:00");
        seed_checked_in(&conn, "Jane", "Smith", "2026-08-29T09:30:00+00:00");

        // Operator marks the first entry by hand — outside any specified operation
        conn.execute(
            "UPDATE waiting_room SET status = 'called_through' WHERE id = ?1",
            params![id],
        )
        .unwrap();

        let queue = list_waiting(&conn).unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].patient_name, "Jane Smith");
        assert_eq!(queue[0].status, WaitingStatus::Waiting);
    }

    #[test]
    fn row_carries_doctor_and_time_from_appointment() {
        let conn = open_memory_database().unwrap();
        seed_checked_in(&conn, "John", "Doe", "2026-08-29T08:45:00+00:00");

        let queue = list_waiting(&conn).unwrap();
        assert_eq!(queue[0].doctor.as_deref(), Some("Dr. Chen"));
        assert_eq!(queue[0].appt_time, "09:00");
    }

    #[test]
    fn empty_queue_is_not_an_error() {
        let conn = open_memory_database().unwrap();
        assert!(list_waiting(&conn).unwrap().is_empty());
    }
}
