//! Durable local cache of the board collection
//!
//! A single JSON file mirrors the last known board list so the UI has
//! something to show before the first fetch completes. The cache is written
//! after every applied mutation and replaced wholesale after every full
//! fetch.

use crate::error::Result;
use std::path::{Path, PathBuf};
use taskboard::Board;
use tokio::fs;

/// JSON file holding the cached board collection
#[derive(Debug, Clone)]
pub struct LocalCacheFile {
    path: PathBuf,
}

impl LocalCacheFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached boards; a missing file is an empty cache
    pub async fn load(&self) -> Result<Vec<Board>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the cache with the current board collection
    pub async fn save(&self, boards: &[Board]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(boards)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}
