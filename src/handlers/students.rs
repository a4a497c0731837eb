use axum::{Json, extract::State};

use crate::db::Student;
use crate::{RollcallError, router::RollcallState};

/// GET /api/students -> every student ordered by id.
pub async fn list_students_handler(
    State(state): State<RollcallState>,
) -> Result<Json<Vec<Student>>, RollcallError> {
    let students = state.storage.list_students().await?;
    Ok(Json(students))
}
