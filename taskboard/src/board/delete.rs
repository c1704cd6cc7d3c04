//! DeleteBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::response::Confirmation;
use crate::types::BoardId;

/// Delete a board, cascading to all of its columns and tasks
#[derive(Debug)]
pub struct DeleteBoard {
    /// The board to delete
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: BoardId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteBoard {
    type Output = Confirmation;

    async fn execute(&self, ctx: &BoardContext) -> Result<Confirmation, BoardError> {
        ctx.delete_board(&self.id).await?;
        tracing::info!(board_id = %self.id, "deleted board");
        Ok(Confirmation::new("Board deleted"))
    }
}
