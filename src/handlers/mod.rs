pub mod attendance;
pub mod report;
pub mod students;
