//! BoardContext - I/O primitives for board storage
//!
//! The context provides access to the document store. No business logic
//! methods, just data access primitives. Commands do all the work.

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use crate::types::{Board, BoardId};
use std::sync::Arc;

/// Context passed to every command - provides access, not logic
#[derive(Clone)]
pub struct BoardContext {
    store: Arc<dyn BoardStore>,
}

impl BoardContext {
    /// Create a new context backed by the given store
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// List all boards
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        self.store.list().await
    }

    /// Read one board, failing with `BoardNotFound` if absent
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| BoardError::BoardNotFound { id: id.to_string() })
    }

    /// Persist a new board document
    pub async fn insert_board(&self, board: &Board) -> Result<()> {
        self.store.insert(board).await
    }

    /// Replace a board document as a unit, failing with `BoardNotFound`
    /// if it no longer exists
    pub async fn write_board(&self, board: &Board) -> Result<()> {
        if self.store.replace(board).await? {
            Ok(())
        } else {
            Err(BoardError::BoardNotFound {
                id: board.id.to_string(),
            })
        }
    }

    /// Delete a board document, failing with `BoardNotFound` if absent
    pub async fn delete_board(&self, id: &BoardId) -> Result<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(BoardError::BoardNotFound { id: id.to_string() })
        }
    }
}
