//! ListBoards command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::types::Board;

/// List all boards
#[derive(Debug, Default)]
pub struct ListBoards;

impl ListBoards {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListBoards {
    type Output = Vec<Board>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Board>, BoardError> {
        ctx.list_boards().await
    }
}
