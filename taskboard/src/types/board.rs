//! Board-level types: Board and Column
//!
//! A board is the whole persisted document: its columns and their tasks are
//! stored inline and replaced as a unit on every save.

use super::ids::{BoardId, ColumnId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};

/// Titles of the columns every new board is provisioned with
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// The board document: user-named, with an ordered list of columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a new board provisioned with the standard three columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BoardId::generate(),
            name: name.into(),
            columns: Self::default_columns(),
        }
    }

    /// The standard column template for a new board
    pub fn default_columns() -> Vec<Column> {
        DEFAULT_COLUMN_TITLES
            .iter()
            .map(|title| Column::new(*title))
            .collect()
    }

    /// Find a column by id (linear scan, ids are unique within a board)
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Find two distinct columns by id, mutably. Returns `None` if either id
    /// is absent or both ids name the same column.
    pub fn find_columns_mut(
        &mut self,
        first: &ColumnId,
        second: &ColumnId,
    ) -> Option<(&mut Column, &mut Column)> {
        let i = self.columns.iter().position(|c| &c.id == first)?;
        let j = self.columns.iter().position(|c| &c.id == second)?;
        if i == j {
            return None;
        }
        if i < j {
            let (head, tail) = self.columns.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.columns.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    /// Total task count across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// A column: fixed-role ordered bucket of tasks within a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create a new empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::generate(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Find a task by id
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Find a task by id (mutable)
    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Position of a task within the ordered sequence
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}
