use rusqlite::{params, Connection, Row};

use crate::db::DatabaseError;
use crate::models::Patient;

pub(crate) fn map_patient_row(row: &Row) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        dob: row.get(3)?,
        mobile: row.get(4)?,
        postcode: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Insert a patient row and return its id.
pub fn insert_patient(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    dob: &str,
    mobile: Option<&str>,
    postcode: Option<&str>,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (first_name, last_name, dob, mobile, postcode)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![first_name, last_name, dob, mobile, postcode],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Patient, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, dob, mobile, postcode, created_at
         FROM patients WHERE id = ?1",
    )?;

    stmt.query_row(params![id], map_patient_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DatabaseError::NotFound {
                entity_type: "patient".into(),
                id,
            },
            other => other.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn insert_and_get_patient() {
        let conn = open_memory_database().unwrap();
        let id = insert_patient(
            &conn,
            "John",
            "Doe",
            "1980-05-15",
            Some("0771234567"),
            Some("10115"),
        )
        .unwrap();

        let patient = get_patient(&conn, id).unwrap();
        assert_eq!(patient.first_name, "John");
        assert_eq!(patient.dob, "1980-05-15");
        assert_eq!(patient.mobile.as_deref(), Some("0771234567"));
        assert_eq!(patient.full_name(), "John Doe");
        assert!(!patient.created_at.is_empty());
    }

    #[test]
    fn optional_contact_fields_can_be_absent() {
        let conn = open_memory_database().unwrap();
        let id = insert_patient(&conn, "Jane", "Smith", "1992-08-22", None, None).unwrap();
        let patient = get_patient(&conn, id).unwrap();
        assert!(patient.mobile.is_none());
        assert!(patient.postcode.is_none());
    }

    #[test]
    fn missing_patient_is_not_found() {
        let conn = open_memory_database().unwrap();
        let err = get_patient(&conn, 999).unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));
    }
}
