//! Task type: the unit of work on a board

use super::ids::TaskId;
use serde::{Deserialize, Serialize};

/// A task/card on the board. Belongs to exactly one column at any time;
/// ownership transfers atomically on move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Task {
    /// Create a new task with a freshly generated id and empty description
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
