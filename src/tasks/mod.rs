//! Task service — the business layer between the REST handlers and storage.
//!
//! The rules are deliberately thin: default `completed` to false, stamp
//! timestamps explicitly on create/update (no storage-layer hooks), and
//! translate an absent row into [`TaskError::NotFound`].

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::storage::{Storage, TaskRow};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found with id: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// External-facing shape of a task, used in every response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Validated input for create/update. The transport layer guarantees the
/// title is non-blank and the length constraints hold before this is built.
#[derive(Debug, Clone)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    /// Absent in the request body means false — update overwrites
    /// unconditionally.
    pub completed: bool,
}

pub struct TaskService {
    storage: Arc<Storage>,
}

impl TaskService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    /// Persist a new task. One `now` goes to both timestamps, so a freshly
    /// created task always has `createdAt == updatedAt`.
    pub async fn create_task(&self, input: TaskInput) -> Result<Task, TaskError> {
        let now = Utc::now().to_rfc3339();
        let row = self
            .storage
            .insert_task(
                &input.title,
                input.description.as_deref(),
                input.completed,
                &now,
            )
            .await?;
        info!(id = row.id, "task created");
        Ok(row.into())
    }

    /// Every stored task, newest first. An empty store yields an empty vec.
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, TaskError> {
        let rows = self.storage.list_tasks().await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    pub async fn get_task_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.storage
            .get_task(id)
            .await?
            .map(Task::from)
            .ok_or(TaskError::NotFound(id))
    }

    /// Overwrite title, description, and completed; `id` and `createdAt`
    /// stay as they were, `updatedAt` is refreshed.
    pub async fn update_task(&self, id: i64, input: TaskInput) -> Result<Task, TaskError> {
        let now = Utc::now().to_rfc3339();
        let row = self
            .storage
            .update_task(
                id,
                &input.title,
                input.description.as_deref(),
                input.completed,
                &now,
            )
            .await?
            .ok_or(TaskError::NotFound(id))?;
        info!(id, "task updated");
        Ok(row.into())
    }

    /// Hard delete — no tombstone. Deleting an id that was already removed
    /// fails with NotFound again.
    pub async fn delete_task(&self, id: i64) -> Result<(), TaskError> {
        if !self.storage.delete_task(id).await? {
            return Err(TaskError::NotFound(id));
        }
        info!(id, "task deleted");
        Ok(())
    }
}
