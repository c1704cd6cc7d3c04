//! Board commands: list, create, rename, delete

mod create;
mod delete;
mod list;
mod rename;

pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use list::ListBoards;
pub use rename::RenameBoard;
