//! UpdateTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::response::TaskResponse;
use crate::types::{BoardId, ColumnId, TaskId};

/// Edit a task's title and/or description in place.
///
/// An absent or empty field keeps its previous value, so a partial payload
/// never blanks out a task.
#[derive(Debug)]
pub struct UpdateTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    /// Replacement title; ignored when empty
    pub title: Option<String>,
    /// Replacement description; ignored when empty
    pub description: Option<String>,
}

impl UpdateTask {
    pub fn new(board_id: BoardId, column_id: ColumnId, task_id: TaskId) -> Self {
        Self {
            board_id,
            column_id,
            task_id,
            title: None,
            description: None,
        }
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    type Output = TaskResponse;

    async fn execute(&self, ctx: &BoardContext) -> Result<TaskResponse, BoardError> {
        let mut board = ctx.read_board(&self.board_id).await?;
        let column = board
            .find_column_mut(&self.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column_id.to_string(),
            })?;
        let task = column
            .find_task_mut(&self.task_id)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: self.task_id.to_string(),
            })?;

        if let Some(title) = self.title.as_deref() {
            if !title.trim().is_empty() {
                task.title = title.to_string();
            }
        }
        if let Some(description) = self.description.as_deref() {
            if !description.trim().is_empty() {
                task.description = description.to_string();
            }
        }
        let updated = task.clone();

        ctx.write_board(&board).await?;
        Ok(TaskResponse::new("Task updated", updated))
    }
}
