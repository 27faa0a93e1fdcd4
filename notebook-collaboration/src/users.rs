use std::sync::Arc;

use notebook_entity::User;
use notebook_persistence::{NotebookStore, RecordStore};

use crate::CollaborationError;

#[derive(Clone)]
pub struct Users {
  users: Arc<dyn RecordStore<User>>,
}

impl Users {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.users.clone())
  }

  pub fn from_store(users: Arc<dyn RecordStore<User>>) -> Self {
    Self { users }
  }

  pub async fn get_users(&self) -> Result<Vec<User>, CollaborationError> {
    Ok(self.users.load_all().await?)
  }

  pub async fn get_user(&self, user_id: &str) -> Result<User, CollaborationError> {
    self
      .users
      .get(user_id)
      .await?
      .ok_or_else(|| CollaborationError::UserNotFound(user_id.to_string()))
  }

  pub async fn get_user_by_email(&self, email: &str) -> Result<User, CollaborationError> {
    let users = self.users.load_all().await?;
    users
      .into_iter()
      .find(|user| user.email == email)
      .ok_or_else(|| CollaborationError::UserNotFound(email.to_string()))
  }

  pub async fn create_user(&self, user: User) -> Result<User, CollaborationError> {
    let mut users = self.users.load_all().await?;
    if users.iter().any(|u| u.id == user.id) {
      return Err(CollaborationError::UserAlreadyExists(user.id));
    }
    users.push(user.clone());
    self.users.save_all(&users).await?;
    Ok(user)
  }
}
