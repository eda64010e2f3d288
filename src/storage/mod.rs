use anyhow::{Context as _, Result};
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions as _, SqlitePool};
use std::{path::Path, str::FromStr};

/// Default timeout for individual SQLite queries.
/// Prevents hung queries from blocking the server indefinitely.
const QUERY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Execute a future with the standard query timeout.
/// Returns an error if the operation takes longer than `QUERY_TIMEOUT`.
async fn with_timeout<T>(fut: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "database query timed out after {}s",
            QUERY_TIMEOUT.as_secs()
        )),
    }
}

/// A task as held in the `tasks` table.
///
/// `created_at` is set once at insert and never modified; `updated_at` is
/// refreshed by every write so `created_at <= updated_at` always holds.
/// Timestamps are RFC 3339 UTC strings, which sort chronologically as text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(data_dir: &Path) -> Result<Self> {
        Self::new_with_slow_query(data_dir, 0).await
    }

    /// Create storage with slow-query logging enabled.
    ///
    /// `slow_query_ms` is the threshold in milliseconds — queries exceeding it
    /// are logged at WARN level. Set to 0 to disable slow-query logging.
    pub async fn new_with_slow_query(data_dir: &Path, slow_query_ms: u64) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let db_path = data_dir.join("tasks.db");
        let mut opts =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", db_path.display()))?
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .create_if_missing(true);

        if slow_query_ms > 0 {
            opts = opts.log_slow_statements(
                log::LevelFilter::Warn,
                std::time::Duration::from_millis(slow_query_ms),
            );
        }

        let pool = SqlitePool::connect_with(opts).await?;
        Self::migrate(&pool).await?;
        Ok(Self { pool })
    }

    /// Close the connection pool. Any query issued afterwards fails, so this
    /// runs only once the server has stopped accepting requests.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("src/storage/migrations")
            .run(pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    // ─── Tasks ──────────────────────────────────────────────────────────────

    /// Insert a new task and return the stored row, id assigned by SQLite.
    /// `now` is written to both `created_at` and `updated_at`.
    pub async fn insert_task(
        &self,
        title: &str,
        description: Option<&str>,
        completed: bool,
        now: &str,
    ) -> Result<TaskRow> {
        let result = sqlx::query(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;
        let id = result.last_insert_rowid();
        self.get_task(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("task not found after insert"))
    }

    pub async fn get_task(&self, id: i64) -> Result<Option<TaskRow>> {
        Ok(sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// All tasks, newest first. `id DESC` breaks ties between rows created
    /// within the same timestamp.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRow>> {
        with_timeout(async {
            Ok(
                sqlx::query_as("SELECT * FROM tasks ORDER BY created_at DESC, id DESC")
                    .fetch_all(&self.pool)
                    .await?,
            )
        })
        .await
    }

    pub async fn list_tasks_by_completed(&self, completed: bool) -> Result<Vec<TaskRow>> {
        with_timeout(async {
            Ok(sqlx::query_as(
                "SELECT * FROM tasks WHERE completed = ? ORDER BY created_at DESC, id DESC",
            )
            .bind(completed)
            .fetch_all(&self.pool)
            .await?)
        })
        .await
    }

    pub async fn task_exists(&self, id: i64) -> Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    pub async fn count_tasks(&self) -> Result<u64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0 as u64)
    }

    /// Overwrite title, description, and completed, refreshing `updated_at`.
    /// `id` and `created_at` are never touched. Returns `None` when no row
    /// has that id — the UPDATE and the read-back share one transaction so
    /// the returned row is exactly what was committed.
    pub async fn update_task(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
        completed: bool,
        now: &str,
    ) -> Result<Option<TaskRow>> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, completed = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        let row = sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Hard delete. Returns `true` if a row was removed, `false` if the id
    /// did not exist.
    pub async fn delete_task(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
