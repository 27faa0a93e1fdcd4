use chrono::Utc;
use notebook_entity::define::{Record, generate_block_id, generate_id};
use notebook_entity::{
  Activity, ActivityType, Comment, CommentUpdate, CreateActivityParams, CreateCommentParams,
  CreateShareParams, PageShare, ShareRole, User,
};
use serde_json::json;

#[test]
fn record_families_test() {
  assert_eq!(<Comment as Record>::FAMILY, "comments");
  assert_eq!(<PageShare as Record>::FAMILY, "shares");
  assert_eq!(<Activity as Record>::FAMILY, "activities");
  assert_eq!(<User as Record>::FAMILY, "users");
}

#[test]
fn generated_ids_are_unique_test() {
  assert_ne!(generate_id(), generate_id());
  assert_eq!(generate_block_id().chars().count(), 10);
}

#[test]
fn activity_type_is_snake_case_test() {
  let activity = CreateActivityParams::new(ActivityType::PageShared, "u2", "u1")
    .with_page(Some("p1".to_string()))
    .with_content("Page shared with editor access")
    .into_activity(Utc::now());

  let value = serde_json::to_value(&activity).unwrap();
  assert_eq!(value["type"], json!("page_shared"));
  assert_eq!(value["userId"], json!("u2"));
  assert_eq!(value["actorId"], json!("u1"));
  assert_eq!(value["read"], json!(false));
}

#[test]
fn share_role_defaults_to_viewer_and_is_ordered_test() {
  let params: CreateShareParams =
    serde_json::from_value(json!({"pageId": "p1", "createdBy": "u1"})).unwrap();
  assert_eq!(params.role, ShareRole::Viewer);
  assert!(ShareRole::Viewer < ShareRole::Editor);
  assert!(ShareRole::Editor < ShareRole::Admin);
  assert_eq!(ShareRole::Admin.to_string(), "admin");
}

#[test]
fn comment_update_resolves_test() {
  let mut comment = CreateCommentParams::new("u1", "looks good")
    .on_page("p1")
    .into_comment(Utc::now());
  assert!(comment.is_discussion_of("p1"));
  assert!(!comment.resolved);

  CommentUpdate::resolve().apply_to(&mut comment);
  assert!(comment.resolved);
  assert_eq!(comment.content, "looks good");
}

#[test]
fn records_accept_naive_timestamps_test() {
  let comment: Comment = serde_json::from_value(json!({
    "id": "c1",
    "blockId": "b1",
    "pageId": null,
    "content": "imported",
    "authorId": "u1",
    "mentions": [],
    "resolved": false,
    "createdAt": "2025-10-18T12:34:56.123456",
    "updatedAt": "2025-10-18T12:34:56.123456",
    "parentId": null
  }))
  .unwrap();
  assert_eq!(comment.created_at, comment.updated_at);

  let share: PageShare = serde_json::from_value(json!({
    "id": "s1",
    "pageId": "p1",
    "userId": "u2",
    "role": "editor",
    "createdAt": "2025-10-18T12:34:56",
    "createdBy": "u1"
  }))
  .unwrap();
  assert_eq!(share.created_at.to_rfc3339(), "2025-10-18T12:34:56+00:00");

  let activity: Activity = serde_json::from_value(json!({
    "id": "a1",
    "type": "mention",
    "userId": "u2",
    "actorId": "u1",
    "read": false,
    "createdAt": "2025-10-18T12:34:56.5"
  }))
  .unwrap();
  assert_eq!(activity.created_at.timestamp_subsec_millis(), 500);

  let err = serde_json::from_value::<PageShare>(json!({
    "id": "s1",
    "pageId": "p1",
    "role": "viewer",
    "createdAt": "not a time",
    "createdBy": "u1"
  }))
  .unwrap_err();
  assert!(err.to_string().contains("invalid timestamp"));
}
