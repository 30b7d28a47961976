//! Waiting-room endpoint — the staff-facing queue view.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::repository::waiting_room::{self, WaitingRoomRow};

/// `GET /api/waiting-room` — everyone still waiting, FIFO by check-in time.
/// Poll/refresh driven; nothing here removes entries.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<WaitingRoomRow>>, ApiError> {
    let conn = ctx.db()?;
    let queue = waiting_room::list_waiting(&conn)?;
    Ok(Json(queue))
}
