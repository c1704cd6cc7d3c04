//! Move commands: ReorderTask (within a column) and MoveTask (across columns)

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::execute::{async_trait, Execute};
use crate::ordering;
use crate::response::{Confirmation, TaskResponse};
use crate::types::{BoardId, ColumnId, TaskId};

/// Relocate a task to a new position within its column.
///
/// The target index addresses the post-removal sequence; see
/// [`ordering::move_within`].
#[derive(Debug)]
pub struct ReorderTask {
    pub board_id: BoardId,
    pub column_id: ColumnId,
    pub task_id: TaskId,
    pub target_index: usize,
}

impl ReorderTask {
    pub fn new(
        board_id: BoardId,
        column_id: ColumnId,
        task_id: TaskId,
        target_index: usize,
    ) -> Self {
        Self {
            board_id,
            column_id,
            task_id,
            target_index,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ReorderTask {
    type Output = TaskResponse;

    async fn execute(&self, ctx: &BoardContext) -> Result<TaskResponse, BoardError> {
        let mut board = ctx.read_board(&self.board_id).await?;
        let column = board
            .find_column_mut(&self.column_id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.column_id.to_string(),
            })?;

        let task = ordering::move_within(column, &self.task_id, self.target_index)?;

        ctx.write_board(&board).await?;
        tracing::debug!(
            board_id = %self.board_id,
            task_id = %self.task_id,
            target_index = self.target_index,
            "moved task within column"
        );
        Ok(TaskResponse::new("Task moved within column", task))
    }
}

/// Relocate a task from one column to the end of another.
///
/// Cross-column moves always land at the end of the destination; there is no
/// target-index variant. Moving with source equal to destination degenerates
/// to a move-to-end within that column.
#[derive(Debug)]
pub struct MoveTask {
    pub board_id: BoardId,
    pub source_column_id: ColumnId,
    pub dest_column_id: ColumnId,
    pub task_id: TaskId,
}

impl MoveTask {
    pub fn new(
        board_id: BoardId,
        source_column_id: ColumnId,
        dest_column_id: ColumnId,
        task_id: TaskId,
    ) -> Self {
        Self {
            board_id,
            source_column_id,
            dest_column_id,
            task_id,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    type Output = Confirmation;

    async fn execute(&self, ctx: &BoardContext) -> Result<Confirmation, BoardError> {
        let mut board = ctx.read_board(&self.board_id).await?;

        if board.find_column(&self.source_column_id).is_none() {
            return Err(BoardError::ColumnNotFound {
                id: self.source_column_id.to_string(),
            });
        }
        if board.find_column(&self.dest_column_id).is_none() {
            return Err(BoardError::ColumnNotFound {
                id: self.dest_column_id.to_string(),
            });
        }

        if self.source_column_id == self.dest_column_id {
            let column = board
                .find_column_mut(&self.source_column_id)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: self.source_column_id.to_string(),
                })?;
            let task = ordering::remove(column, &self.task_id)?;
            ordering::insert(column, task);
        } else {
            let (source, dest) = board
                .find_columns_mut(&self.source_column_id, &self.dest_column_id)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: self.source_column_id.to_string(),
                })?;
            ordering::move_across(source, dest, &self.task_id)?;
        }

        ctx.write_board(&board).await?;
        tracing::debug!(
            board_id = %self.board_id,
            source = %self.source_column_id,
            dest = %self.dest_column_id,
            task_id = %self.task_id,
            "moved task across columns"
        );
        Ok(Confirmation::new("Task moved"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::store::MemoryBoardStore;
    use crate::task::AddTask;
    use crate::types::Board;
    use std::sync::Arc;

    async fn setup_with_tasks(titles: &[&str]) -> (BoardContext, Board, Vec<TaskId>) {
        let ctx = BoardContext::new(Arc::new(MemoryBoardStore::new()));
        let board = CreateBoard::new("Test").execute(&ctx).await.unwrap();
        let column_id = board.columns[0].id.clone();

        let mut ids = Vec::new();
        for title in titles {
            let created = AddTask::new(board.id.clone(), column_id.clone(), *title)
                .execute(&ctx)
                .await
                .unwrap();
            ids.push(created.task.id);
        }
        let board = ctx.read_board(&board.id).await.unwrap();
        (ctx, board, ids)
    }

    fn titles_in(board: &Board, column_id: &ColumnId) -> Vec<String> {
        board
            .find_column(column_id)
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_reorder_task_post_removal_semantics() {
        let (ctx, board, ids) = setup_with_tasks(&["T1", "T2", "T3"]).await;
        let column_id = board.columns[0].id.clone();

        let result = ReorderTask::new(board.id.clone(), column_id.clone(), ids[0], 2)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result.task.id, ids[0]);
        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(titles_in(&saved, &column_id), ["T2", "T3", "T1"]);
    }

    #[tokio::test]
    async fn test_reorder_out_of_range_persists_nothing() {
        let (ctx, board, ids) = setup_with_tasks(&["A", "B"]).await;
        let column_id = board.columns[0].id.clone();

        let err = ReorderTask::new(board.id.clone(), column_id.clone(), ids[0], 5)
            .execute(&ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, BoardError::InvalidPosition { .. }));
        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(titles_in(&saved, &column_id), ["A", "B"]);
    }

    #[tokio::test]
    async fn test_move_task_across_columns() {
        let (ctx, board, ids) = setup_with_tasks(&["T1"]).await;
        let source = board.columns[0].id.clone();
        let dest = board.columns[1].id.clone();

        let result = MoveTask::new(board.id.clone(), source.clone(), dest.clone(), ids[0])
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result.message, "Task moved");
        let saved = ctx.read_board(&board.id).await.unwrap();
        assert!(saved.find_column(&source).unwrap().tasks.is_empty());
        assert_eq!(titles_in(&saved, &dest), ["T1"]);
        assert_eq!(saved.task_count(), 1);
    }

    #[tokio::test]
    async fn test_move_task_appends_after_existing() {
        let (ctx, board, ids) = setup_with_tasks(&["Mover"]).await;
        let source = board.columns[0].id.clone();
        let dest = board.columns[2].id.clone();
        AddTask::new(board.id.clone(), dest.clone(), "Resident")
            .execute(&ctx)
            .await
            .unwrap();

        MoveTask::new(board.id.clone(), source, dest.clone(), ids[0])
            .execute(&ctx)
            .await
            .unwrap();

        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(titles_in(&saved, &dest), ["Resident", "Mover"]);
    }

    #[tokio::test]
    async fn test_move_task_same_column_moves_to_end() {
        let (ctx, board, ids) = setup_with_tasks(&["A", "B"]).await;
        let column_id = board.columns[0].id.clone();

        MoveTask::new(board.id.clone(), column_id.clone(), column_id.clone(), ids[0])
            .execute(&ctx)
            .await
            .unwrap();

        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(titles_in(&saved, &column_id), ["B", "A"]);
    }

    #[tokio::test]
    async fn test_move_task_missing_dest_column() {
        let (ctx, board, ids) = setup_with_tasks(&["T"]).await;
        let source = board.columns[0].id.clone();

        let err = MoveTask::new(board.id.clone(), source, ColumnId::generate(), ids[0])
            .execute(&ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, BoardError::ColumnNotFound { .. }));
        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(saved.task_count(), 1);
    }

    #[tokio::test]
    async fn test_move_task_missing_in_source() {
        let (ctx, board, _) = setup_with_tasks(&["T"]).await;
        let source = board.columns[0].id.clone();
        let dest = board.columns[1].id.clone();

        let err = MoveTask::new(board.id.clone(), source, dest, TaskId::new())
            .execute(&ctx)
            .await
            .unwrap_err();

        assert!(matches!(err, BoardError::TaskNotFound { .. }));
        let saved = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(saved.task_count(), 1);
    }
}
