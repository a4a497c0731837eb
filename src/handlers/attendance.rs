use axum::{Json, extract::State};
use tracing::info;

use crate::middleware::AttendancePayload;
use crate::types::RecordedResponse;
use crate::{RollcallError, router::RollcallState};

/// POST /api/attendance -> upserts the whole batch or nothing.
pub async fn record_attendance_handler(
    State(state): State<RollcallState>,
    AttendancePayload(submission): AttendancePayload,
) -> Result<Json<RecordedResponse>, RollcallError> {
    state.storage.record_attendance(&submission).await?;

    info!(
        course = %submission.course,
        session_date = %submission.session_date,
        entries = submission.records.len(),
        "attendance recorded"
    );
    Ok(Json(RecordedResponse { ok: true }))
}
