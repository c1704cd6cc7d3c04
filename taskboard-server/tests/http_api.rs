//! End-to-end tests for the REST surface.
//!
//! Each test starts the server on a random port against a fresh store and
//! drives it with a real HTTP client.

use std::sync::Arc;
use taskboard::store::{FsBoardStore, MemoryBoardStore};
use taskboard::BoardContext;
use taskboard_server::router;
use tokio::net::TcpListener;

async fn start_server(ctx: BoardContext) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(ctx);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_memory_server() -> String {
    start_server(BoardContext::new(Arc::new(MemoryBoardStore::new()))).await
}

async fn create_board(client: &reqwest::Client, base: &str, name: &str) -> serde_json::Value {
    let resp = client
        .post(format!("{base}/boards"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

async fn add_task(
    client: &reqwest::Client,
    base: &str,
    board_id: &str,
    column_id: &str,
    title: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("{base}/boards/{board_id}/columns/{column_id}/tasks"))
        .json(&serde_json::json!({ "title": title, "description": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["task"].clone()
}

async fn column_titles(
    client: &reqwest::Client,
    base: &str,
    board_id: &str,
    column_id: &str,
) -> Vec<String> {
    let tasks: Vec<serde_json::Value> = client
        .get(format!("{base}/boards/{board_id}/columns/{column_id}/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    tasks
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_endpoint() {
    let base = start_memory_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_board_lifecycle() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let board = create_board(&client, &base, "Sprint 1").await;
    assert_eq!(board["name"], "Sprint 1");
    let columns = board["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0]["title"], "To Do");
    assert_eq!(columns[1]["title"], "In Progress");
    assert_eq!(columns[2]["title"], "Done");

    let board_id = board["id"].as_str().unwrap();

    // Rename
    let resp = client
        .put(format!("{base}/boards/{board_id}"))
        .json(&serde_json::json!({ "name": "Sprint 2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let renamed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(renamed["name"], "Sprint 2");

    // List
    let boards: Vec<serde_json::Value> = client
        .get(format!("{base}/boards"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0]["name"], "Sprint 2");

    // Delete cascades
    let resp = client
        .delete(format!("{base}/boards/{board_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let boards: Vec<serde_json::Value> = client
        .get(format!("{base}/boards"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(boards.is_empty());
}

#[tokio::test]
async fn test_task_crud_and_listing() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let board = create_board(&client, &base, "Work").await;
    let board_id = board["id"].as_str().unwrap();
    let column_id = board["columns"][0]["id"].as_str().unwrap();

    let task = add_task(&client, &base, board_id, column_id, "Write docs").await;
    let task_id = task["id"].as_str().unwrap();
    // Task ids are ULIDs, not store keys
    assert_eq!(task_id.len(), 26);

    // Update title only; description survives
    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/columns/{column_id}/tasks/{task_id}"
        ))
        .json(&serde_json::json!({ "title": "Write better docs" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(updated["task"]["title"], "Write better docs");

    assert_eq!(
        column_titles(&client, &base, board_id, column_id).await,
        ["Write better docs"]
    );

    // Delete
    let resp = client
        .delete(format!(
            "{base}/boards/{board_id}/columns/{column_id}/tasks/{task_id}"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(column_titles(&client, &base, board_id, column_id)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_move_within_column_post_removal_index() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let board = create_board(&client, &base, "Order").await;
    let board_id = board["id"].as_str().unwrap();
    let column_id = board["columns"][0]["id"].as_str().unwrap();

    let t1 = add_task(&client, &base, board_id, column_id, "T1").await;
    add_task(&client, &base, board_id, column_id, "T2").await;
    add_task(&client, &base, board_id, column_id, "T3").await;
    let t1_id = t1["id"].as_str().unwrap();

    // Note: no "columns" segment in this path
    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/{column_id}/tasks/{t1_id}/move/2"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["task"]["id"], t1_id);

    assert_eq!(
        column_titles(&client, &base, board_id, column_id).await,
        ["T2", "T3", "T1"]
    );
}

#[tokio::test]
async fn test_move_across_columns_appends() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let board = create_board(&client, &base, "Flow").await;
    let board_id = board["id"].as_str().unwrap();
    let source = board["columns"][0]["id"].as_str().unwrap();
    let dest = board["columns"][1]["id"].as_str().unwrap();

    let task = add_task(&client, &base, board_id, source, "Mover").await;
    let task_id = task["id"].as_str().unwrap();
    add_task(&client, &base, board_id, dest, "Resident").await;

    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/columns/{source}/tasks/{task_id}/move/{dest}"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    assert!(column_titles(&client, &base, board_id, source)
        .await
        .is_empty());
    assert_eq!(
        column_titles(&client, &base, board_id, dest).await,
        ["Resident", "Mover"]
    );
}

#[tokio::test]
async fn test_error_status_codes() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let board = create_board(&client, &base, "Errors").await;
    let board_id = board["id"].as_str().unwrap();
    let column_id = board["columns"][0]["id"].as_str().unwrap();
    let task = add_task(&client, &base, board_id, column_id, "Only").await;
    let task_id = task["id"].as_str().unwrap();

    // Malformed board id -> 400 before lookup
    let resp = client
        .get(format!("{base}/boards/not-a-key/columns/{column_id}/tasks"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("invalid identifier"));

    // Well-formed but unknown board id -> 404, regardless of column id
    let ghost = "0123456789abcdef01234567";
    let resp = client
        .get(format!("{base}/boards/{ghost}/columns/{column_id}/tasks"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("board not found"));

    // Existing board, unknown column -> 404 at the column level
    let resp = client
        .get(format!("{base}/boards/{board_id}/columns/{ghost}/tasks"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("column not found"));

    // Non-numeric target index -> 400
    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/{column_id}/tasks/{task_id}/move/abc"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Out-of-range target index -> 400
    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/{column_id}/tasks/{task_id}/move/5"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Target index at the usize limit -> still a plain 400
    let resp = client
        .put(format!(
            "{base}/boards/{board_id}/{column_id}/tasks/{task_id}/move/{}",
            usize::MAX
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Empty name -> 400
    let resp = client
        .post(format!("{base}/boards"))
        .json(&serde_json::json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_file_backed_store_persists_across_server_restarts() {
    let temp = tempfile::TempDir::new().unwrap();
    let data_dir = temp.path().join("boards");
    let client = reqwest::Client::new();

    let base = start_server(BoardContext::new(Arc::new(FsBoardStore::new(&data_dir)))).await;
    let board = create_board(&client, &base, "Durable").await;
    let board_id = board["id"].as_str().unwrap().to_string();
    let column_id = board["columns"][0]["id"].as_str().unwrap().to_string();
    add_task(&client, &base, &board_id, &column_id, "Kept").await;

    // A second server over the same directory sees the same documents
    let base2 = start_server(BoardContext::new(Arc::new(FsBoardStore::new(&data_dir)))).await;
    assert_eq!(
        column_titles(&client, &base2, &board_id, &column_id).await,
        ["Kept"]
    );
}
