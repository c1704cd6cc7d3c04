//! HTTP request handlers

pub mod boards;
pub mod tasks;

/// Health check handler for the /health endpoint
pub async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "service": "taskboard-server"
    }))
}
