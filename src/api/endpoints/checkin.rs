//! Check-in endpoints.
//!
//! Two endpoints:
//! - `POST /api/checkin` — match a claimed identity to today's appointment
//! - `POST /api/confirm-checkin` — confirm and enter the waiting room

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::checkin::{self, CheckinClaim, CheckinMatch};

/// `POST /api/checkin` — look up today's appointment for the claimed
/// identity. Read-only; confirmation is a separate call.
pub async fn lookup(
    State(ctx): State<ApiContext>,
    Json(claim): Json<CheckinClaim>,
) -> Result<Json<CheckinMatch>, ApiError> {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let conn = ctx.db()?;

    let matched = checkin::find_todays_appointment(&conn, &claim, &today)?;
    Ok(Json(matched))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub appointment_id: Option<i64>,
}

#[derive(Serialize)]
pub struct ConfirmResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// `POST /api/confirm-checkin` — mark the appointment checked in and
/// enqueue the patient.
pub async fn confirm(
    State(ctx): State<ApiContext>,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, ApiError> {
    let (patient_id, appointment_id) = match (req.patient_id, req.appointment_id) {
        (Some(p), Some(a)) => (p, a),
        _ => {
            return Err(ApiError::BadRequest(
                "Missing patient or appointment ID".into(),
            ))
        }
    };

    let now = chrono::Utc::now().to_rfc3339();
    let mut conn = ctx.db()?;
    checkin::confirm_checkin(&mut conn, patient_id, appointment_id, &now)?;

    Ok(Json(ConfirmResponse {
        message: "Successfully checked in",
        status: "in_waiting_room",
    }))
}
