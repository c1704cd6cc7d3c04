//! Client library for a taskboard server
//!
//! Holds an in-memory mirror of the server's board collection plus a
//! per-column task cache, and keeps both consistent with the server through
//! a fixed reconciliation protocol: mutations apply the entity the server
//! returned, moves re-fetch the affected columns, and a full fetch replaces
//! the mirror wholesale. An optional JSON cache file seeds the mirror
//! between sessions.
//!
//! ```no_run
//! use taskboard_client::{BoardsClient, HttpRemote, LocalCacheFile};
//!
//! # async fn run() -> taskboard_client::Result<()> {
//! let remote = HttpRemote::new("http://localhost:5000");
//! let mut client = BoardsClient::new(remote)
//!     .with_local_cache(LocalCacheFile::new("boards.json"));
//! client.start().await?;
//! for board in client.boards() {
//!     println!("{}: {}", board.id, board.name);
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod local_cache;
mod mirror;
mod reconcile;
mod remote;

pub use error::{ClientError, Result};
pub use local_cache::LocalCacheFile;
pub use mirror::{BoardsMirror, ColumnTaskCache};
pub use reconcile::BoardsClient;
pub use remote::{HttpRemote, RemoteBoards};
