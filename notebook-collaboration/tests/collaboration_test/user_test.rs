use assert_matches2::assert_matches;
use notebook_collaboration::CollaborationError;
use notebook_entity::User;

use crate::util::CollaborationTest;

#[tokio::test]
async fn create_and_find_users_test() {
  let test = CollaborationTest::new();
  let users = &test.collab.users;
  let ada = users
    .create_user(User::new("u1", "Ada", "ada@example.com"))
    .await
    .unwrap();
  users
    .create_user(User::new("u2", "Grace", "grace@example.com"))
    .await
    .unwrap();

  assert_eq!(users.get_users().await.unwrap().len(), 2);
  assert_eq!(users.get_user("u1").await.unwrap(), ada);
  assert_eq!(
    users.get_user_by_email("grace@example.com").await.unwrap().id,
    "u2"
  );
}

#[tokio::test]
async fn duplicate_user_id_conflicts_test() {
  let test = CollaborationTest::new();
  let users = &test.collab.users;
  users
    .create_user(User::new("u1", "Ada", "ada@example.com"))
    .await
    .unwrap();
  assert_matches!(
    users
      .create_user(User::new("u1", "Other", "other@example.com"))
      .await,
    Err(CollaborationError::UserAlreadyExists(_))
  );
}

#[tokio::test]
async fn missing_user_test() {
  let test = CollaborationTest::new();
  let users = &test.collab.users;
  assert_matches!(
    users.get_user("nope").await,
    Err(CollaborationError::UserNotFound(_))
  );
  assert_matches!(
    users.get_user_by_email("nobody@example.com").await,
    Err(CollaborationError::UserNotFound(_))
  );
}
