// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::tasks::{Task, TaskInput};
use crate::AppContext;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Request body for create and update. `id` and timestamps are not accepted
/// from the caller — unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Field-level validation, run before any service call. Returns an empty map
/// when the payload is valid. Lengths are counted in Unicode scalar values;
/// a whitespace-only title counts as missing.
fn validate(payload: &TaskPayload) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    match payload.title.as_deref() {
        None => {
            errors.insert("title", "Title is required".to_string());
        }
        Some(t) if t.trim().is_empty() => {
            errors.insert("title", "Title is required".to_string());
        }
        Some(t) if t.chars().count() > TITLE_MAX_CHARS => {
            errors.insert(
                "title",
                format!("Title must be between 1 and {TITLE_MAX_CHARS} characters"),
            );
        }
        Some(_) => {}
    }
    if let Some(d) = payload.description.as_deref() {
        if d.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.insert(
                "description",
                format!("Description must not exceed {DESCRIPTION_MAX_CHARS} characters"),
            );
        }
    }
    errors
}

/// Convert a validated payload into service input. `completed` defaults to
/// false when omitted — by the documented contract, update overwrites it
/// unconditionally.
fn into_input(payload: TaskPayload) -> TaskInput {
    TaskInput {
        title: payload.title.unwrap_or_default(),
        description: payload.description,
        completed: payload.completed.unwrap_or(false),
    }
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    let task = ctx.tasks.create_task(into_input(body)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(ctx.tasks.get_all_tasks().await?))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(ctx.tasks.get_task_by_id(id).await?))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
    Json(body): Json<TaskPayload>,
) -> Result<Json<Task>, ApiError> {
    let errors = validate(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }
    Ok(Json(ctx.tasks.update_task(id, into_input(body)).await?))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    ctx.tasks.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
