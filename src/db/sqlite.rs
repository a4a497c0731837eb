use crate::config::Config;
use crate::db::models::{ReportRow, Student};
use crate::db::schema::SQLITE_INIT;
use crate::error::RollcallError;
use crate::types::AttendanceSubmission;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, Transaction};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub type SqlitePool = Pool<Sqlite>;

const UPSERT_ATTENDANCE: &str = r#"
    INSERT INTO attendance (student_id, course, session_date, status)
    VALUES (?, ?, ?, ?)
    ON CONFLICT(student_id, course, session_date) DO UPDATE SET
        status = excluded.status
"#;

const REPORT_QUERY: &str = r#"
    SELECT s.name, s.roll,
           SUM(CASE WHEN a.status = 'Present' THEN 1 ELSE 0 END) AS present,
           COUNT(a.id) AS total,
           ROUND(
               SUM(CASE WHEN a.status = 'Present' THEN 1 ELSE 0 END) * 100.0
                   / NULLIF(COUNT(a.id), 0),
               2
           ) AS percentage
    FROM students s
    LEFT JOIN attendance a ON s.id = a.student_id
    GROUP BY s.id, s.name, s.roll
    ORDER BY s.id
"#;

/// Process-wide handle over the connection pool. Cloning shares the pool.
#[derive(Clone)]
pub struct AttendanceStorage {
    pool: SqlitePool,
}

impl AttendanceStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool described by `cfg`. The database file is created if absent.
    pub async fn connect(cfg: &Config) -> Result<Self, RollcallError> {
        let options = SqliteConnectOptions::from_str(&cfg.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .connect_with(options)
            .await?;
        info!(
            database_url = %cfg.database_url,
            max_connections = cfg.max_connections,
            "database pool ready"
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RollcallError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, RollcallError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name, roll FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    /// Apply a whole submission in one transaction.
    ///
    /// Entries are upserted in order on a single checked-out connection. If any
    /// statement fails the transaction is rolled back and nothing from the batch
    /// is kept. The connection goes back to the pool when `tx` is dropped.
    pub async fn record_attendance(
        &self,
        submission: &AttendanceSubmission,
    ) -> Result<(), RollcallError> {
        let mut tx = self.pool.begin().await?;

        match Self::upsert_entries(&mut tx, submission).await {
            Ok(()) => {
                tx.commit().await?;
                debug!(
                    course = %submission.course,
                    session_date = %submission.session_date,
                    entries = submission.records.len(),
                    "attendance batch committed"
                );
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "rollback of attendance batch failed");
                }
                Err(e.into())
            }
        }
    }

    async fn upsert_entries(
        tx: &mut Transaction<'_, Sqlite>,
        submission: &AttendanceSubmission,
    ) -> Result<(), sqlx::Error> {
        for entry in &submission.records {
            sqlx::query(UPSERT_ATTENDANCE)
                .bind(entry.student_id)
                .bind(submission.course.as_str())
                .bind(submission.session_date)
                .bind(entry.status.as_str())
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }

    pub async fn report(&self) -> Result<Vec<ReportRow>, RollcallError> {
        let rows = sqlx::query_as::<_, ReportRow>(REPORT_QUERY)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Close every pooled connection. Called once on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
