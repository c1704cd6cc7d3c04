//! REST HTTP surface for the taskboard engine
//!
//! Thin shell over the engine's commands: routes parameterized by
//! board/column/task identifiers, JSON bodies in and out, engine errors
//! mapped onto 400/404/500 with a `{message}` payload.

pub mod error;
pub mod handlers;

use axum::routing::{get, put};
use axum::Router;
use taskboard::BoardContext;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub ctx: BoardContext,
}

/// Build the application router.
///
/// The within-column move route has no `columns` segment; that is the
/// published path shape and clients depend on it.
pub fn router(ctx: BoardContext) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/boards",
            get(handlers::boards::list_boards).post(handlers::boards::create_board),
        )
        .route(
            "/boards/:board_id",
            put(handlers::boards::rename_board).delete(handlers::boards::delete_board),
        )
        .route(
            "/boards/:board_id/columns/:column_id/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::add_task),
        )
        .route(
            "/boards/:board_id/columns/:column_id/tasks/:task_id",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        // :column_id is the source column here; the destination comes last
        .route(
            "/boards/:board_id/columns/:column_id/tasks/:task_id/move/:dest_column_id",
            put(handlers::tasks::move_task),
        )
        .route(
            "/boards/:board_id/:column_id/tasks/:task_id/move/:target_index",
            put(handlers::tasks::reorder_task),
        )
        .with_state(AppState { ctx })
}
