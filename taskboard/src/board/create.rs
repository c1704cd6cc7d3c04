//! CreateBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::types::Board;

/// Create a new board with the standard three-column template
#[derive(Debug)]
pub struct CreateBoard {
    /// The board name (required, non-empty)
    pub name: String,
}

impl CreateBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for CreateBoard {
    type Output = Board;

    async fn execute(&self, ctx: &BoardContext) -> Result<Board, BoardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardError::invalid_value("name", "must not be empty"));
        }

        let board = Board::new(name);
        ctx.insert_board(&board).await?;
        tracing::info!(board_id = %board.id, name = %board.name, "created board");
        Ok(board)
    }
}
