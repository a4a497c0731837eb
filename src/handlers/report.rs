use axum::{Json, extract::State};

use crate::db::ReportRow;
use crate::{RollcallError, router::RollcallState};

/// GET /api/report -> present/total/percentage per student.
pub async fn attendance_report_handler(
    State(state): State<RollcallState>,
) -> Result<Json<Vec<ReportRow>>, RollcallError> {
    Ok(Json(state.storage.report().await?))
}
