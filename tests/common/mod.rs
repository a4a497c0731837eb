#![allow(dead_code)]

use rollcall::{AttendanceStorage, Config};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

/// A storage handle backed by its own temp-file SQLite database.
pub struct TestDb {
    pub storage: AttendanceStorage,
    path: PathBuf,
}

impl TestDb {
    pub async fn new(tag: &str) -> Self {
        Self::with_pool_size(tag, 4).await
    }

    pub async fn with_pool_size(tag: &str, max_connections: u32) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "rollcall-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let cfg = Config {
            database_url: format!("sqlite:{}", path.display()),
            max_connections,
            ..Config::default()
        };
        let storage = AttendanceStorage::connect(&cfg)
            .await
            .expect("failed to open test database");
        storage
            .init_schema()
            .await
            .expect("failed to initialize schema");

        Self { storage, path }
    }

    pub async fn add_student(&self, id: i64, name: &str, roll: &str) {
        sqlx::query("INSERT INTO students (id, name, roll) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(roll)
            .execute(self.storage.pool())
            .await
            .expect("failed to insert student");
    }

    /// All attendance rows as (student_id, course, session_date, status), ordered.
    pub async fn attendance_rows(&self) -> Vec<(i64, String, String, String)> {
        sqlx::query_as(
            "SELECT student_id, course, session_date, status FROM attendance \
             ORDER BY student_id, course, session_date",
        )
        .fetch_all(self.storage.pool())
        .await
        .expect("failed to read attendance")
    }

    pub async fn drop_table(&self, table: &str) {
        sqlx::query(&format!("DROP TABLE {table}"))
            .execute(self.storage.pool())
            .await
            .expect("failed to drop table");
    }

    pub async fn cleanup(self) {
        self.storage.close().await;
        let _ = fs::remove_file(&self.path);
    }
}
