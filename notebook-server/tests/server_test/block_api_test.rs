use assert_json_diff::assert_json_eq;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::util::TestServer;

async fn with_blocks() -> TestServer {
  let server = TestServer::new();
  for block in [
    json!({"id": "b1", "type": "text", "textType": "h1", "value": "Title"}),
    json!({"id": "b2", "type": "todo", "value": "Ship it", "checked": false}),
    json!({"id": "b3", "type": "divider"}),
  ] {
    let (status, _) = server.post("/blocks", block).await;
    assert_eq!(status, StatusCode::CREATED);
  }
  server
}

fn ids(body: &Value) -> Vec<&str> {
  body
    .as_array()
    .unwrap()
    .iter()
    .map(|block| block["id"].as_str().unwrap())
    .collect()
}

#[tokio::test]
async fn create_and_get_block_test() {
  let server = with_blocks().await;
  let (status, body) = server.get("/blocks/b2").await;
  assert_eq!(status, StatusCode::OK);
  assert_json_eq!(
    body,
    json!({"id": "b2", "type": "todo", "value": "Ship it", "checked": false})
  );

  let (status, body) = server
    .post("/blocks", json!({"id": "b1", "type": "quote", "value": "dup"}))
    .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"]["code"], json!("conflict"));
}

#[tokio::test]
async fn update_and_delete_block_test() {
  let server = with_blocks().await;
  let (status, body) = server
    .put("/blocks/b2", Some(json!({"checked": true})))
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["checked"], json!(true));
  assert_eq!(body["value"], json!("Ship it"));

  let (status, body) = server.delete("/blocks/b2").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!({"message": "Block deleted successfully", "id": "b2"})
  );

  let (status, body) = server.get("/blocks/b2").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(
    body["error"]["message"],
    json!("Failed to fetch block: The block is not found: b2")
  );
}

#[tokio::test]
async fn duplicate_block_test() {
  let server = with_blocks().await;
  let (status, copy) = server.post("/blocks/b1/duplicate", Value::Null).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_ne!(copy["id"], json!("b1"));
  assert_eq!(copy["value"], json!("Title"));

  let (_, body) = server.get("/blocks").await;
  assert_eq!(ids(&body)[1], copy["id"].as_str().unwrap());
}

#[tokio::test]
async fn reorder_blocks_test() {
  let server = with_blocks().await;
  let (status, body) = server
    .put("/blocks/reorder", Some(json!(["b3", "b1", "b2"])))
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(ids(&body), vec!["b3", "b1", "b2"]);

  let (status, body) = server
    .put("/blocks/reorder", Some(json!(["b1", "b2"])))
    .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"]["code"], json!("invalid_input"));

  let (_, body) = server.get("/blocks").await;
  assert_eq!(ids(&body), vec!["b3", "b1", "b2"]);
}
