//! Appointment endpoints.
//!
//! Two endpoints on one path:
//! - `GET /api/appointments/:id` — upcoming appointments for a patient
//! - `PUT /api/appointments/:id` — reschedule an appointment
//!
//! The path id means "patient" for GET and "appointment" for PUT, matching
//! the method split of the public contract.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::appointment;
use crate::models::AppointmentSummary;

/// `GET /api/appointments/:id` — all appointments for the patient from
/// today onward, soonest first. An empty array is a normal result.
pub async fn list_for_patient(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<AppointmentSummary>>, ApiError> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let conn = ctx.db()?;

    let upcoming = appointment::list_upcoming(&conn, patient_id, &today)?;
    Ok(Json(upcoming.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Serialize)]
pub struct RescheduleResponse {
    pub message: &'static str,
}

/// `PUT /api/appointments/:id` — overwrite date and time, forcing status
/// to `rescheduled`. No conflict detection.
pub async fn reschedule(
    State(ctx): State<ApiContext>,
    Path(appointment_id): Path<i64>,
    Json(req): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, ApiError> {
    if req.date.is_empty() || req.time.is_empty() {
        return Err(ApiError::BadRequest("Date and time required".into()));
    }

    let conn = ctx.db()?;
    appointment::reschedule(&conn, appointment_id, &req.date, &req.time)?;

    Ok(Json(RescheduleResponse {
        message: "Appointment updated successfully",
    }))
}
