use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::db::AttendanceStorage;
use crate::handlers::{
    attendance::record_attendance_handler, report::attendance_report_handler,
    students::list_students_handler,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct RollcallState {
    pub storage: AttendanceStorage,
}

impl RollcallState {
    pub fn new(storage: AttendanceStorage) -> Self {
        Self { storage }
    }
}

/// API routes, with everything else served from `static_dir`.
pub fn rollcall_router(state: RollcallState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/students", get(list_students_handler))
        .route("/api/attendance", post(record_attendance_handler))
        .route("/api/report", get(attendance_report_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
