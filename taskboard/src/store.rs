//! Document store for board persistence
//!
//! The board is the unit of consistency: every mutation, including task-level
//! edits, saves the whole document. There is no field-level persistence for
//! nested structures and no locking; concurrent writers to the same board
//! race with last-write-wins, which is acceptable at single-user scope.

use crate::error::{BoardError, Result};
use crate::types::{Board, BoardId};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Find/replace/delete-by-id access to board documents
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// List all board documents
    async fn list(&self) -> Result<Vec<Board>>;

    /// Find one board by id
    async fn find(&self, id: &BoardId) -> Result<Option<Board>>;

    /// Insert a new board document
    async fn insert(&self, board: &Board) -> Result<()>;

    /// Replace an existing board document as a unit.
    /// Returns false if no document with that id exists.
    async fn replace(&self, board: &Board) -> Result<bool>;

    /// Delete a board document, cascading to its columns and tasks.
    /// Returns false if no document with that id exists.
    async fn delete(&self, id: &BoardId) -> Result<bool>;
}

/// File-backed store: one JSON document per board under a data directory
pub struct FsBoardStore {
    root: PathBuf,
}

impl FsBoardStore {
    /// Create a store rooted at the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn board_path(&self, id: &BoardId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    async fn write_document(&self, board: &Board) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        let json = serde_json::to_string_pretty(board)?;
        fs::write(self.board_path(&board.id), json).await?;
        Ok(())
    }
}

#[async_trait]
impl BoardStore for FsBoardStore {
    async fn list(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::new();

        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(boards),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            let board: Board = serde_json::from_str(&content).map_err(|e| {
                BoardError::storage(format!("corrupt board document {}: {e}", path.display()))
            })?;
            boards.push(board);
        }

        // Directory order is arbitrary; keys embed no ordering, so sort by id
        // for a stable listing.
        boards.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(boards)
    }

    async fn find(&self, id: &BoardId) -> Result<Option<Board>> {
        match fs::read_to_string(self.board_path(id)).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, board: &Board) -> Result<()> {
        self.write_document(board).await
    }

    async fn replace(&self, board: &Board) -> Result<bool> {
        if self.find(&board.id).await?.is_none() {
            return Ok(false);
        }
        self.write_document(board).await?;
        Ok(true)
    }

    async fn delete(&self, id: &BoardId) -> Result<bool> {
        match fs::remove_file(self.board_path(id)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store, used by tests and as a lightweight fake.
/// Preserves insertion order in listings.
#[derive(Default)]
pub struct MemoryBoardStore {
    boards: tokio::sync::RwLock<Vec<Board>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn list(&self) -> Result<Vec<Board>> {
        Ok(self.boards.read().await.clone())
    }

    async fn find(&self, id: &BoardId) -> Result<Option<Board>> {
        Ok(self
            .boards
            .read()
            .await
            .iter()
            .find(|b| &b.id == id)
            .cloned())
    }

    async fn insert(&self, board: &Board) -> Result<()> {
        self.boards.write().await.push(board.clone());
        Ok(())
    }

    async fn replace(&self, board: &Board) -> Result<bool> {
        let mut boards = self.boards.write().await;
        match boards.iter_mut().find(|b| b.id == board.id) {
            Some(existing) => {
                *existing = board.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &BoardId) -> Result<bool> {
        let mut boards = self.boards.write().await;
        let before = boards.len();
        boards.retain(|b| &b.id != id);
        Ok(boards.len() < before)
    }
}
