//! ID wrapper types for type-safe identifiers
//!
//! Boards and columns are addressed by the document store's native key
//! format: a 24-character hex string. Tasks use application-generated ULIDs
//! that are independent of the store's keys. Parsing a path segment into one
//! of these wrappers is the identifier-format check; it happens before any
//! lookup.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use ulid::Ulid;

/// Length of a document key in hex characters
const DOC_KEY_LEN: usize = 24;

fn is_doc_key(s: &str) -> bool {
    s.len() == DOC_KEY_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn generate_doc_key() -> String {
    use rand::Rng as _;
    let bytes: [u8; DOC_KEY_LEN / 2] = rand::rng().random();
    let mut key = String::with_capacity(DOC_KEY_LEN);
    for b in bytes {
        // Writing to a String cannot fail
        let _ = write!(key, "{b:02x}");
    }
    key
}

/// Board identifier in the store's native key format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(String);

impl BoardId {
    /// Generate a fresh board key
    pub fn generate() -> Self {
        Self(generate_doc_key())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BoardId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_doc_key(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(BoardError::invalid_identifier(s))
        }
    }
}

/// Column identifier in the store's native key format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(String);

impl ColumnId {
    /// Generate a fresh column key
    pub fn generate() -> Self {
        Self(generate_doc_key())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_doc_key(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(BoardError::invalid_identifier(s))
        }
    }
}

/// Task identifier, application-generated and globally unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(Ulid);

impl TaskId {
    /// Generate a fresh task id
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|_| BoardError::invalid_identifier(s))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}
