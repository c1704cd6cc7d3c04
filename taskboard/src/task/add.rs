//! AddTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::ordering;
use crate::response::TaskResponse;
use crate::types::{BoardId, ColumnId, Task};

/// Add a new task to the end of a column
#[derive(Debug)]
pub struct AddTask {
    /// The board containing the column
    pub board_id: BoardId,
    /// The column to add into
    pub column_id: ColumnId,
    /// The task title (required, non-empty)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
}

impl AddTask {
    pub fn new(board_id: BoardId, column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            board_id,
            column_id,
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTask {
    type Output = TaskResponse;

    async fn execute(&self, ctx: &BoardContext) -> Result<TaskResponse, BoardError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::invalid_value("title", "must not be empty"));
        }

        let mut board = ctx.read_board(&self.board_id).await?;
        let column = board
            .find_column_mut(&self.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column_id.to_string(),
            })?;

        let task = Task::new(title)
            .with_description(self.description.clone().unwrap_or_default());
        let created = task.clone();
        ordering::insert(column, task);

        ctx.write_board(&board).await?;
        tracing::debug!(board_id = %self.board_id, column_id = %self.column_id, task_id = %created.id, "added task");
        Ok(TaskResponse::new("Task added", created))
    }
}
