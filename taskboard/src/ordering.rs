//! Pure structural edits to a column's task sequence
//!
//! No I/O and no retries live here; commands resolve the column first and
//! persist afterwards. Order within a column is significant and preserved
//! exactly as inserted.
//!
//! Within-column moves interpret the target index against the *post-removal*
//! sequence: the task is taken out first, then reinserted. Moving the head of
//! `[T1, T2, T3]` to index 2 therefore yields `[T2, T3, T1]`. This matches
//! the splice-then-splice behavior callers depend on and must not be
//! "corrected" to pre-removal indexing.

use crate::error::{BoardError, Result};
use crate::types::{Column, Task, TaskId};

/// Append a task to the end of the column's sequence
pub fn insert(column: &mut Column, task: Task) {
    column.tasks.push(task);
}

/// Remove the task with the given id, returning it for reuse.
/// Fails with `TaskNotFound` if the column does not contain it.
pub fn remove(column: &mut Column, id: &TaskId) -> Result<Task> {
    let index = column
        .position_of(id)
        .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })?;
    Ok(column.tasks.remove(index))
}

/// Relocate a task to `target` within the same column.
///
/// `target` must be a valid insertion index into the post-removal sequence,
/// i.e. at most `len - 1`; otherwise `InvalidPosition` is returned and the
/// column is left unchanged. Returns a copy of the task at its new position.
pub fn move_within(column: &mut Column, id: &TaskId, target: usize) -> Result<Task> {
    let index = column
        .position_of(id)
        .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })?;

    // Valid insertion indices run to the end of the shortened sequence
    if target >= column.tasks.len() {
        return Err(BoardError::InvalidPosition {
            index: target,
            len: column.tasks.len(),
        });
    }

    let task = column.tasks.remove(index);
    let moved = task.clone();
    column.tasks.insert(target, task);
    Ok(moved)
}

/// Relocate a task from `source` to the end of `dest`.
///
/// Fails with `TaskNotFound` if the task is absent from `source`. There is
/// deliberately no target-index variant: cross-column moves always append.
pub fn move_across(source: &mut Column, dest: &mut Column, id: &TaskId) -> Result<()> {
    let task = remove(source, id)?;
    insert(dest, task);
    Ok(())
}
