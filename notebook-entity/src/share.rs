use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define::{PageId, Record, SHARES, ShareId, UserId, generate_id};
use crate::util::deserialize_timestamp;

/// Access level granted by a share, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ShareRole {
  #[default]
  Viewer,
  Editor,
  Admin,
}

impl ShareRole {
  pub fn as_str(&self) -> &'static str {
    match self {
      ShareRole::Viewer => "viewer",
      ShareRole::Editor => "editor",
      ShareRole::Admin => "admin",
    }
  }
}

impl Display for ShareRole {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A page shared with a user, or through a link when `user_id` is absent.
/// Shares are informational only; nothing enforces them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageShare {
  pub id: ShareId,
  pub page_id: PageId,
  #[serde(default)]
  pub user_id: Option<UserId>,
  pub role: ShareRole,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_at: DateTime<Utc>,
  pub created_by: UserId,
}

impl Record for PageShare {
  const FAMILY: &'static str = SHARES;

  fn id(&self) -> &str {
    &self.id
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateShareParams {
  pub page_id: PageId,
  #[serde(default)]
  pub user_id: Option<UserId>,
  #[serde(default)]
  pub role: ShareRole,
  pub created_by: UserId,
}

impl CreateShareParams {
  pub fn new<T: Into<String>>(page_id: T, created_by: T) -> Self {
    Self {
      page_id: page_id.into(),
      user_id: None,
      role: ShareRole::default(),
      created_by: created_by.into(),
    }
  }

  pub fn with_user<T: Into<String>>(self, user_id: T) -> Self {
    Self {
      user_id: Some(user_id.into()),
      ..self
    }
  }

  pub fn with_role(self, role: ShareRole) -> Self {
    Self { role, ..self }
  }

  pub fn into_share(self, now: DateTime<Utc>) -> PageShare {
    PageShare {
      id: generate_id(),
      page_id: self.page_id,
      user_id: self.user_id,
      role: self.role,
      created_at: now,
      created_by: self.created_by,
    }
  }
}
