//! Remote API surface
//!
//! `RemoteBoards` abstracts the server so reconciliation can be exercised
//! against a fake; `HttpRemote` is the real thing over reqwest.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use taskboard::{Board, BoardId, ColumnId, Confirmation, Task, TaskId, TaskResponse};

/// The server-side mutation and fetch surface, one method per endpoint
#[async_trait]
pub trait RemoteBoards: Send + Sync {
    async fn fetch_boards(&self) -> Result<Vec<Board>>;
    async fn create_board(&self, name: &str) -> Result<Board>;
    async fn rename_board(&self, id: &BoardId, name: &str) -> Result<Board>;
    async fn delete_board(&self, id: &BoardId) -> Result<Confirmation>;

    async fn fetch_tasks(&self, board: &BoardId, column: &ColumnId) -> Result<Vec<Task>>;
    async fn add_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        title: &str,
        description: &str,
    ) -> Result<TaskResponse>;
    async fn update_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<TaskResponse>;
    async fn delete_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
    ) -> Result<Confirmation>;
    async fn move_task(
        &self,
        board: &BoardId,
        source: &ColumnId,
        dest: &ColumnId,
        task: &TaskId,
    ) -> Result<Confirmation>;
    async fn reorder_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        target_index: usize,
    ) -> Result<TaskResponse>;
}

/// HTTP client for a taskboard server
#[derive(Debug, Clone)]
pub struct HttpRemote {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRemote {
    /// Create a remote for the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        // Error bodies carry {"message"}; fall back to the status line
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteBoards for HttpRemote {
    async fn fetch_boards(&self) -> Result<Vec<Board>> {
        let resp = self.http.get(self.url("/boards")).send().await?;
        Self::decode(resp).await
    }

    async fn create_board(&self, name: &str) -> Result<Board> {
        let resp = self
            .http
            .post(self.url("/boards"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn rename_board(&self, id: &BoardId, name: &str) -> Result<Board> {
        let resp = self
            .http
            .put(self.url(&format!("/boards/{id}")))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete_board(&self, id: &BoardId) -> Result<Confirmation> {
        let resp = self
            .http
            .delete(self.url(&format!("/boards/{id}")))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn fetch_tasks(&self, board: &BoardId, column: &ColumnId) -> Result<Vec<Task>> {
        let resp = self
            .http
            .get(self.url(&format!("/boards/{board}/columns/{column}/tasks")))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn add_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        title: &str,
        description: &str,
    ) -> Result<TaskResponse> {
        let resp = self
            .http
            .post(self.url(&format!("/boards/{board}/columns/{column}/tasks")))
            .json(&serde_json::json!({ "title": title, "description": description }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn update_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<TaskResponse> {
        let resp = self
            .http
            .put(self.url(&format!("/boards/{board}/columns/{column}/tasks/{task}")))
            .json(&serde_json::json!({ "title": title, "description": description }))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn delete_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
    ) -> Result<Confirmation> {
        let resp = self
            .http
            .delete(self.url(&format!("/boards/{board}/columns/{column}/tasks/{task}")))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn move_task(
        &self,
        board: &BoardId,
        source: &ColumnId,
        dest: &ColumnId,
        task: &TaskId,
    ) -> Result<Confirmation> {
        let resp = self
            .http
            .put(self.url(&format!(
                "/boards/{board}/columns/{source}/tasks/{task}/move/{dest}"
            )))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn reorder_task(
        &self,
        board: &BoardId,
        column: &ColumnId,
        task: &TaskId,
        target_index: usize,
    ) -> Result<TaskResponse> {
        // Within-column moves have no "columns" path segment
        let resp = self
            .http
            .put(self.url(&format!(
                "/boards/{board}/{column}/tasks/{task}/move/{target_index}"
            )))
            .send()
            .await?;
        Self::decode(resp).await
    }
}
