//! ListTasks command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::types::{BoardId, ColumnId, Task};

/// List the tasks in one column, in order
#[derive(Debug)]
pub struct ListTasks {
    pub board_id: BoardId,
    pub column_id: ColumnId,
}

impl ListTasks {
    pub fn new(board_id: BoardId, column_id: ColumnId) -> Self {
        Self {
            board_id,
            column_id,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListTasks {
    type Output = Vec<Task>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Task>, BoardError> {
        let board = ctx.read_board(&self.board_id).await?;
        let column = board
            .find_column(&self.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column_id.to_string(),
            })?;
        Ok(column.tasks.clone())
    }
}
