//! Shared response payload shapes
//!
//! Commands that return an affected task use `TaskResponse`; commands that
//! only confirm use `Confirmation`. Board-returning commands respond with the
//! board document itself.

use crate::types::Task;
use serde::{Deserialize, Serialize};

/// Confirmation-only payload: `{message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Task-carrying payload: `{message, task}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub message: String,
    pub task: Task,
}

impl TaskResponse {
    pub fn new(message: impl Into<String>, task: Task) -> Self {
        Self {
            message: message.into(),
            task,
        }
    }
}
