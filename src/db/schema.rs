//! SQL DDL for the attendance tables.

/// SQLite schema with:
/// - `students` keyed by `id`; rows are provisioned outside this service
/// - `attendance` holding at most one status per (student, course, session date)
/// - `student_id` referencing `students(id)`, so unknown students fail the insert
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    roll TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER NOT NULL REFERENCES students(id),
    course TEXT NOT NULL,
    session_date TEXT NOT NULL, -- YYYY-MM-DD
    status TEXT NOT NULL,
    UNIQUE (student_id, course, session_date)
);

CREATE INDEX IF NOT EXISTS idx_attendance_student_id ON attendance(student_id);
"#;
