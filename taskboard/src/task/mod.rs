//! Task commands: add, list, update, delete, move

mod add;
mod delete;
mod list;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use list::ListTasks;
pub use mv::{MoveTask, ReorderTask};
pub use update::UpdateTask;
