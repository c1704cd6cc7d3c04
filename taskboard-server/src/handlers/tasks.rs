//! Task endpoints
//!
//! Path segments are parsed into typed ids before any command is built, so a
//! malformed identifier is a 400 before the store is consulted.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use taskboard::task::{AddTask, DeleteTask, ListTasks, MoveTask, ReorderTask, UpdateTask};
use taskboard::{BoardError, BoardId, ColumnId, Execute, TaskId};

/// Request body for task create/update
#[derive(Debug, Deserialize)]
pub struct TaskBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn add_task(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(String, String)>,
    Json(body): Json<TaskBody>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let column_id: ColumnId = column_id.parse()?;

    let mut cmd = AddTask::new(board_id, column_id, body.title.unwrap_or_default());
    if let Some(description) = body.description {
        cmd = cmd.with_description(description);
    }
    let created = cmd.execute(&state.ctx).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let column_id: ColumnId = column_id.parse()?;

    let tasks = ListTasks::new(board_id, column_id)
        .execute(&state.ctx)
        .await?;
    Ok(Json(tasks))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((board_id, column_id, task_id)): Path<(String, String, String)>,
    Json(body): Json<TaskBody>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let column_id: ColumnId = column_id.parse()?;
    let task_id: TaskId = task_id.parse()?;

    let mut cmd = UpdateTask::new(board_id, column_id, task_id);
    if let Some(title) = body.title {
        cmd = cmd.with_title(title);
    }
    if let Some(description) = body.description {
        cmd = cmd.with_description(description);
    }
    let updated = cmd.execute(&state.ctx).await?;
    Ok(Json(updated))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((board_id, column_id, task_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let column_id: ColumnId = column_id.parse()?;
    let task_id: TaskId = task_id.parse()?;

    let confirmation = DeleteTask::new(board_id, column_id, task_id)
        .execute(&state.ctx)
        .await?;
    Ok(Json(confirmation))
}

pub async fn move_task(
    State(state): State<AppState>,
    Path((board_id, source_column_id, task_id, dest_column_id)): Path<(
        String,
        String,
        String,
        String,
    )>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let source_column_id: ColumnId = source_column_id.parse()?;
    let dest_column_id: ColumnId = dest_column_id.parse()?;
    let task_id: TaskId = task_id.parse()?;

    let confirmation = MoveTask::new(board_id, source_column_id, dest_column_id, task_id)
        .execute(&state.ctx)
        .await?;
    Ok(Json(confirmation))
}

pub async fn reorder_task(
    State(state): State<AppState>,
    Path((board_id, column_id, task_id, target_index)): Path<(String, String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let board_id: BoardId = board_id.parse()?;
    let column_id: ColumnId = column_id.parse()?;
    let task_id: TaskId = task_id.parse()?;
    let target_index: usize = target_index.parse().map_err(|_| {
        BoardError::invalid_value("targetIndex", "must be a non-negative integer")
    })?;

    let moved = ReorderTask::new(board_id, column_id, task_id, target_index)
        .execute(&state.ctx)
        .await?;
    Ok(Json(moved))
}
