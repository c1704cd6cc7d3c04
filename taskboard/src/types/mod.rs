//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column, DEFAULT_COLUMN_TITLES};
pub use ids::{BoardId, ColumnId, TaskId};
pub use task::Task;
