//! Board endpoints

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use taskboard::board::{CreateBoard, DeleteBoard, ListBoards, RenameBoard};
use taskboard::{BoardId, Execute};

/// Request body for board create/rename
#[derive(Debug, Deserialize)]
pub struct BoardBody {
    #[serde(default)]
    pub name: Option<String>,
}

pub async fn list_boards(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let boards = ListBoards::new().execute(&state.ctx).await?;
    Ok(Json(boards))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(body): Json<BoardBody>,
) -> Result<impl IntoResponse, ApiError> {
    let board = CreateBoard::new(body.name.unwrap_or_default())
        .execute(&state.ctx)
        .await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub async fn rename_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<BoardBody>,
) -> Result<impl IntoResponse, ApiError> {
    let id: BoardId = id.parse()?;
    let board = RenameBoard::new(id, body.name.unwrap_or_default())
        .execute(&state.ctx)
        .await?;
    Ok(Json(board))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: BoardId = id.parse()?;
    let confirmation = DeleteBoard::new(id).execute(&state.ctx).await?;
    Ok(Json(confirmation))
}
