//! In-memory mirror of server-persisted state
//!
//! The mirror renders the UI without waiting on every request. It is an
//! explicit cache component with defined seed/apply/replace operations and a
//! single writer per key; it never invents identifiers for server-backed
//! entities — every id it holds came out of a server response or the durable
//! local cache.

use std::collections::HashMap;
use taskboard::{Board, BoardId, ColumnId, Task, TaskId};

/// Mirror of the board collection
#[derive(Debug, Default)]
pub struct BoardsMirror {
    boards: Vec<Board>,
}

impl BoardsMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mirror from the durable local cache. Only applies when the
    /// mirror is still empty; a fetch that already arrived wins.
    pub fn seed(&mut self, boards: Vec<Board>) {
        if self.boards.is_empty() {
            self.boards = boards;
        }
    }

    /// Replace the whole mirror with a fetched board collection
    pub fn replace_all(&mut self, boards: Vec<Board>) {
        self.boards = boards;
    }

    /// Apply a created board returned by the server
    pub fn apply_created(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Apply an updated board returned by the server. A board the mirror has
    /// never seen is ignored; the next full fetch will pick it up.
    pub fn apply_updated(&mut self, board: Board) {
        if let Some(existing) = self.boards.iter_mut().find(|b| b.id == board.id) {
            *existing = board;
        }
    }

    /// Apply a confirmed deletion
    pub fn apply_deleted(&mut self, id: &BoardId) {
        self.boards.retain(|b| &b.id != id);
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Per-column task cache, kept separately from the board collection so a
/// column can be re-fetched and replaced on its own after a move.
#[derive(Debug, Default)]
pub struct ColumnTaskCache {
    columns: HashMap<(BoardId, ColumnId), Vec<Task>>,
}

impl ColumnTaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one column's cached task list with freshly fetched state
    pub fn replace_column(&mut self, board: &BoardId, column: &ColumnId, tasks: Vec<Task>) {
        self.columns.insert((board.clone(), column.clone()), tasks);
    }

    /// Cached tasks for a column, if the column has been fetched
    pub fn tasks(&self, board: &BoardId, column: &ColumnId) -> Option<&[Task]> {
        self.columns
            .get(&(board.clone(), column.clone()))
            .map(Vec::as_slice)
    }

    /// Apply a created task returned by the server (appends, matching the
    /// server's insert semantics). No-op for an unfetched column.
    pub fn apply_task_added(&mut self, board: &BoardId, column: &ColumnId, task: Task) {
        if let Some(tasks) = self.columns.get_mut(&(board.clone(), column.clone())) {
            tasks.push(task);
        }
    }

    /// Apply an updated task returned by the server, in place
    pub fn apply_task_updated(&mut self, board: &BoardId, column: &ColumnId, task: Task) {
        if let Some(tasks) = self.columns.get_mut(&(board.clone(), column.clone())) {
            if let Some(existing) = tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task;
            }
        }
    }

    /// Apply a confirmed task deletion
    pub fn apply_task_removed(&mut self, board: &BoardId, column: &ColumnId, task: &TaskId) {
        if let Some(tasks) = self.columns.get_mut(&(board.clone(), column.clone())) {
            tasks.retain(|t| &t.id != task);
        }
    }

    /// Drop every cached column belonging to a deleted board
    pub fn invalidate_board(&mut self, board: &BoardId) {
        self.columns.retain(|(b, _), _| b != board);
    }
}
