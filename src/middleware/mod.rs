pub mod submission;

pub use submission::AttendancePayload;
