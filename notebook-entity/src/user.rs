use serde::{Deserialize, Serialize};

use crate::define::{Record, USERS, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
  pub id: UserId,
  pub name: String,
  pub email: String,
  #[serde(default)]
  pub avatar: Option<String>,
}

impl User {
  pub fn new<T: Into<String>>(id: T, name: T, email: T) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      email: email.into(),
      avatar: None,
    }
  }
}

impl Record for User {
  const FAMILY: &'static str = USERS;

  fn id(&self) -> &str {
    &self.id
  }
}
