//! Sample-data seeding for demos and local testing. Wipes the three tables
//! and inserts five patients, each with an appointment today so the check-in
//! flow can be exercised immediately.

use chrono::{Duration, NaiveDate};
use rusqlite::Connection;

use crate::db::repository::appointment::insert_appointment;
use crate::db::repository::patient::insert_patient;
use crate::db::DatabaseError;

const SAMPLE_PATIENTS: [(&str, &str, &str, &str, &str); 5] = [
    ("John", "Doe", "1980-05-15", "0771234567", "10115"),
    ("Jane", "Smith", "1992-08-22", "0779876543", "10200"),
    ("Michael", "Johnson", "1975-12-03", "0763456789", "10300"),
    ("Emily", "Brown", "1988-03-17", "0754321098", "10400"),
    ("David", "Williams", "1995-07-28", "0712345678", "10500"),
];

/// Replace all portal data with the sample dataset. `today` anchors the
/// appointment dates (five today, one tomorrow, two next week).
pub fn seed_sample_data(conn: &Connection, today: NaiveDate) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM waiting_room", [])?;
    conn.execute("DELETE FROM appointments", [])?;
    conn.execute("DELETE FROM patients", [])?;

    let mut patient_ids = Vec::with_capacity(SAMPLE_PATIENTS.len());
    for (first, last, dob, mobile, postcode) in SAMPLE_PATIENTS {
        let id = insert_patient(conn, first, last, dob, Some(mobile), Some(postcode))?;
        patient_ids.push(id);
    }

    let today_s = today.format("%Y-%m-%d").to_string();
    let tomorrow = (today + Duration::days(1)).format("%Y-%m-%d").to_string();
    let next_week = (today + Duration::days(7)).format("%Y-%m-%d").to_string();

    let appointments: [(usize, &str, &str, &str, Option<&str>); 8] = [
        (0, &today_s, "09:00", "Dr. Anderson", None),
        (1, &today_s, "09:30", "Dr. Peterson", None),
        (2, &today_s, "10:00", "Dr. Anderson", None),
        (3, &today_s, "10:30", "Dr. Chen", None),
        (4, &today_s, "11:00", "Dr. Peterson", None),
        (0, &tomorrow, "14:00", "Dr. Anderson", Some("Follow-up visit")),
        (1, &next_week, "09:00", "Dr. Chen", Some("Annual checkup")),
        (2, &next_week, "11:30", "Dr. Peterson", None),
    ];

    for (patient_idx, date, time, doctor, notes) in appointments {
        insert_appointment(conn, patient_ids[patient_idx], date, time, Some(doctor), notes)?;
    }

    tracing::info!(
        patients = SAMPLE_PATIENTS.len(),
        appointments = appointments.len(),
        today = %today_s,
        "Database seeded with sample data"
    );
    Ok(())
}
