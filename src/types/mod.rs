pub mod attendance;

pub use attendance::{AttendanceEntry, AttendanceSubmission, RecordedResponse};
