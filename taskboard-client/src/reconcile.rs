//! Keeping the local mirror consistent with server state
//!
//! Two-step protocol, never both racing: a mutation either applies the
//! entity returned by the server directly to the mirror, or re-fetches the
//! affected column(s) in full and replaces the cached copy. Moves take the
//! re-fetch path because their responses do not carry the destination
//! column's full state. A failed mutation changes no local state.

use crate::error::Result;
use crate::local_cache::LocalCacheFile;
use crate::mirror::{BoardsMirror, ColumnTaskCache};
use crate::remote::RemoteBoards;
use taskboard::{Board, BoardId, ColumnId, Task, TaskId};

/// Client session: remote surface plus the local mirror and durable cache
pub struct BoardsClient<R> {
    remote: R,
    mirror: BoardsMirror,
    tasks: ColumnTaskCache,
    cache: Option<LocalCacheFile>,
}

impl<R: RemoteBoards> BoardsClient<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            mirror: BoardsMirror::new(),
            tasks: ColumnTaskCache::new(),
            cache: None,
        }
    }

    /// Attach a durable local cache file
    pub fn with_local_cache(mut self, cache: LocalCacheFile) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Seed the mirror from the durable cache, if one is attached and
    /// non-empty. Called before the first fetch so the UI has data to show.
    pub async fn seed_from_cache(&mut self) -> Result<()> {
        if let Some(cache) = &self.cache {
            let boards = cache.load().await?;
            if !boards.is_empty() {
                tracing::debug!(count = boards.len(), "seeding mirror from local cache");
                self.mirror.seed(boards);
            }
        }
        Ok(())
    }

    /// Fetch the full board collection and replace the mirror with it,
    /// superseding any seeded state
    pub async fn refresh_boards(&mut self) -> Result<()> {
        let boards = self.remote.fetch_boards().await?;
        self.mirror.replace_all(boards);
        self.persist().await
    }

    /// Seed from the local cache, then fetch
    pub async fn start(&mut self) -> Result<()> {
        self.seed_from_cache().await?;
        self.refresh_boards().await
    }

    pub fn boards(&self) -> &[Board] {
        self.mirror.boards()
    }

    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.mirror.find_board(id)
    }

    /// Cached tasks for a column; `None` until the column is fetched
    pub fn column_tasks(&self, board: &BoardId, column: &ColumnId) -> Option<&[Task]> {
        self.tasks.tasks(board, column)
    }

    /// Re-fetch one column and replace its cached task list
    pub async fn refresh_column(&mut self, board: &BoardId, column: &ColumnId) -> Result<()> {
        let tasks = self.remote.fetch_tasks(board, column).await?;
        self.tasks.replace_column(board, column, tasks);
        Ok(())
    }

    pub async fn create_board(&mut self, name: &str) -> Result<BoardId> {
        let board = self.remote.create_board(name).await?;
        let id = board.id.clone();
        self.mirror.apply_created(board);
        self.persist().await?;
        Ok(id)
    }

    pub async fn rename_board(&mut self, id: &BoardId, name: &str) -> Result<()> {
        let board = self.remote.rename_board(id, name).await?;
        self.mirror.apply_updated(board);
        self.persist().await
    }

    pub async fn delete_board(&mut self, id: &BoardId) -> Result<()> {
        self.remote.delete_board(id).await?;
        self.mirror.apply_deleted(id);
        self.tasks.invalidate_board(id);
        self.persist().await
    }

    pub async fn add_task(
        &mut self,
        board: &BoardId,
        column: &ColumnId,
        title: &str,
        description: &str,
    ) -> Result<TaskId> {
        let created = self.remote.add_task(board, column, title, description).await?;
        let id = created.task.id;
        self.tasks.apply_task_added(board, column, created.task);
        Ok(id)
    }

    pub async fn update_task(
        &mut self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let updated = self
            .remote
            .update_task(board, column, task, title, description)
            .await?;
        self.tasks.apply_task_updated(board, column, updated.task);
        Ok(())
    }

    pub async fn delete_task(
        &mut self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
    ) -> Result<()> {
        self.remote.delete_task(board, column, task).await?;
        self.tasks.apply_task_removed(board, column, task);
        Ok(())
    }

    /// Cross-column move, then re-fetch both affected columns
    pub async fn move_task(
        &mut self,
        board: &BoardId,
        source: &ColumnId,
        dest: &ColumnId,
        task: &TaskId,
    ) -> Result<()> {
        self.remote.move_task(board, source, dest, task).await?;
        self.refresh_column(board, source).await?;
        self.refresh_column(board, dest).await
    }

    /// Within-column move, then re-fetch the column
    pub async fn reorder_task(
        &mut self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        target_index: usize,
    ) -> Result<()> {
        self.remote
            .reorder_task(board, column, task, target_index)
            .await?;
        self.refresh_column(board, column).await
    }

    async fn persist(&self) -> Result<()> {
        if let Some(cache) = &self.cache {
            cache.save(self.mirror.boards()).await?;
        }
        Ok(())
    }
}
