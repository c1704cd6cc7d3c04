//! RenameBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::types::{Board, BoardId};

/// Rename a board in place
#[derive(Debug)]
pub struct RenameBoard {
    /// The board to rename
    pub id: BoardId,
    /// The new name (required, non-empty)
    pub name: String,
}

impl RenameBoard {
    pub fn new(id: BoardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for RenameBoard {
    type Output = Board;

    async fn execute(&self, ctx: &BoardContext) -> Result<Board, BoardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardError::invalid_value("name", "must not be empty"));
        }

        let mut board = ctx.read_board(&self.id).await?;
        board.name = name.to_string();
        ctx.write_board(&board).await?;
        Ok(board)
    }
}
