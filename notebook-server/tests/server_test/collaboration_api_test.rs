use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::util::TestServer;

#[tokio::test]
async fn comment_flow_test() {
  let server = TestServer::new();
  let (status, comment) = server
    .post(
      "/comments",
      json!({
        "blockId": "b1",
        "content": "Can you check this?",
        "authorId": "ada",
        "mentions": ["grace", "linus"]
      }),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);
  let comment_id = comment["id"].as_str().unwrap().to_string();

  let (_, body) = server.get("/comments?block_id=b1").await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (_, body) = server.get("/activities/grace").await;
  assert_eq!(body[0]["type"], json!("mention"));
  assert_eq!(body[0]["commentId"], json!(comment_id));
  let (_, body) = server.get("/activities/ada").await;
  assert_eq!(body[0]["type"], json!("comment"));

  let (status, body) = server
    .put(&format!("/comments/{}/resolve", comment_id), None)
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], json!("Comment resolved successfully"));
  assert_eq!(body["comment"]["resolved"], json!(true));

  let (_, body) = server.get("/comments?block_id=b1").await;
  assert_eq!(body, json!([]));
  let (_, body) = server.get("/comments").await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (status, _) = server
    .put(
      &format!("/comments/{}", comment_id),
      Some(json!({"content": "edited"})),
    )
    .await;
  assert_eq!(status, StatusCode::OK);

  let (status, body) = server.delete(&format!("/comments/{}", comment_id)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["id"], json!(comment_id));
  let (status, _) = server.delete(&format!("/comments/{}", comment_id)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn share_flow_test() {
  let server = TestServer::new();
  let (status, share) = server
    .post(
      "/shares",
      json!({"pageId": "p1", "userId": "grace", "role": "admin", "createdBy": "ada"}),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(share["role"], json!("admin"));

  let (_, body) = server.get("/shares/pages/p1").await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (_, body) = server.get("/activities/grace").await;
  assert_eq!(body[0]["type"], json!("page_shared"));
  assert_eq!(body[0]["content"], json!("Page shared with admin access"));

  let share_id = share["id"].as_str().unwrap();
  let (status, body) = server.delete(&format!("/shares/{}", share_id)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], json!("Share removed successfully"));
  let (status, _) = server.delete(&format!("/shares/{}", share_id)).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn activity_read_flow_test() {
  let server = TestServer::new();
  server
    .post(
      "/comments",
      json!({
        "pageId": "p1",
        "content": "ping",
        "authorId": "ada",
        "mentions": ["grace"]
      }),
    )
    .await;
  server
    .post(
      "/shares",
      json!({"pageId": "p1", "userId": "grace", "createdBy": "ada"}),
    )
    .await;

  let (_, body) = server.get("/activities/grace?unread_only=true").await;
  assert_eq!(body.as_array().unwrap().len(), 2);
  let first = body[0]["id"].as_str().unwrap().to_string();

  let (status, body) = server
    .put(&format!("/activities/{}/read", first), None)
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["activity"]["read"], json!(true));

  let (status, body) = server
    .put("/activities/users/grace/read-all", None)
    .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!({"message": "Marked 1 activities as read", "count": 1})
  );

  let (_, body) = server
    .put("/activities/users/grace/read-all", None)
    .await;
  assert_eq!(body["count"], json!(0));

  let (_, body) = server.get("/activities/grace?unread_only=true").await;
  assert_eq!(body, json!([]));

  let (status, _) = server.put("/activities/nope/read", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_flow_test() {
  let server = TestServer::new();
  let (status, _) = server
    .post(
      "/users",
      json!({"id": "ada", "name": "Ada", "email": "ada@example.com"}),
    )
    .await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, _) = server
    .post(
      "/users",
      json!({"id": "ada", "name": "Ada 2", "email": "ada2@example.com"}),
    )
    .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, body) = server.get("/users/ada").await;
  assert_eq!(body["email"], json!("ada@example.com"));
  let (_, body) = server.get("/users/email/ada@example.com").await;
  assert_eq!(body["id"], json!("ada"));
  let (_, body) = server.get("/users").await;
  assert_eq!(body.as_array().unwrap().len(), 1);

  let (status, body) = server.get("/users/nobody").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_ne!(body["error"], Value::Null);
}
