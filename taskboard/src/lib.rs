//! Kanban board engine with document-store persistence
//!
//! Boards contain an ordered list of columns; each column contains an ordered
//! list of tasks. This crate implements the task-ordering and placement core:
//! entity identity, insertion/removal/relocation within the nested
//! board→column→task hierarchy, and the validate→mutate→persist→respond cycle
//! behind every mutation.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskboard::{BoardContext, Execute};
//! use taskboard::board::CreateBoard;
//! use taskboard::task::AddTask;
//! use taskboard::store::FsBoardStore;
//!
//! # async fn example() -> taskboard::Result<()> {
//! let ctx = BoardContext::new(Arc::new(FsBoardStore::new("/path/to/data")));
//! let board = CreateBoard::new("Sprint 1").execute(&ctx).await?;
//!
//! let column_id = board.columns[0].id.clone();
//! let created = AddTask::new(board.id.clone(), column_id, "Implement feature X")
//!     .with_description("Add the new feature")
//!     .execute(&ctx)
//!     .await?;
//!
//! println!("Created task: {}", created.task.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Persistence model
//!
//! The board is one JSON document holding all of its columns and tasks, and
//! it is replaced as a unit on every save. `store::BoardStore` abstracts the
//! document store behind find/replace/delete-by-id operations; commands never
//! touch storage directly, they go through [`BoardContext`].
//!
//! Board and column ids are 24-hex document keys (the store's native key
//! format); task ids are application-generated ULIDs.

mod context;
mod error;
mod execute;

pub mod ordering;
pub mod response;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod task;

pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use execute::{async_trait, Execute};

// Re-export commonly used types
pub use response::{Confirmation, TaskResponse};
pub use types::{Board, BoardId, Column, ColumnId, Task, TaskId};
