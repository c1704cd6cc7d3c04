//! DeleteTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::ordering;
use crate::response::Confirmation;
use crate::types::{BoardId, ColumnId, TaskId};

/// Delete one task from a column
#[derive(Debug)]
pub struct DeleteTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
}

impl DeleteTask {
    pub fn new(board_id: BoardId, column_id: ColumnId, task_id: TaskId) -> Self {
        Self {
            board_id,
            column_id,
            task_id,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTask {
    type Output = Confirmation;

    async fn execute(&self, ctx: &BoardContext) -> Result<Confirmation, BoardError> {
        let mut board = ctx.read_board(&self.board_id).await?;
        let column = board
            .find_column_mut(&self.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column_id.to_string(),
            })?;

        ordering::remove(column, &self.task_id)?;

        ctx.write_board(&board).await?;
        tracing::debug!(board_id = %self.board_id, task_id = %self.task_id, "deleted task");
        Ok(Confirmation::new("Task deleted"))
    }
}
