//! Database module: models, schema and the pooled storage handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring query rows
//! - `schema.rs`: SQL DDL for bootstrapping an empty database
//! - `sqlite.rs`: `AttendanceStorage`, the only code that talks to the pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{ReportRow, Student};
pub use schema::SQLITE_INIT;
pub use sqlite::{AttendanceStorage, SqlitePool};
