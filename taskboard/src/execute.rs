//! The `Execute` trait implemented by every mutation command
//!
//! Commands are plain structs describing one request. Executing a command
//! runs the full validate, mutate, persist, respond cycle against a context.
//! Each command declares its own typed output so response schemas are
//! explicit per operation.

pub use async_trait::async_trait;

/// A command executable against a context `C`, failing with error `E`
#[async_trait]
pub trait Execute<C, E> {
    /// The typed success payload for this command
    type Output;

    /// Run the command to completion
    async fn execute(&self, ctx: &C) -> std::result::Result<Self::Output, E>;
}
