use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub roll: String,
}

/// Aggregated attendance for one student.
///
/// `percentage` is `None` when the student has no records at all.
#[derive(Debug, Clone, Serialize, PartialEq, FromRow)]
pub struct ReportRow {
    pub name: String,
    pub roll: String,
    pub present: i64,
    pub total: i64,
    pub percentage: Option<f64>,
}
