use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define::{
  ACTIVITIES, ActivityId, BlockId, CommentId, PageId, Record, UserId, generate_id,
};
use crate::util::deserialize_timestamp;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
  Comment,
  Mention,
  PageShared,
  PageUpdated,
  PageCreated,
}

/// A notification addressed to `user_id`, caused by `actor_id`. Activities
/// are append-only; only the `read` flag ever changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  pub id: ActivityId,
  #[serde(rename = "type")]
  pub ty: ActivityType,
  pub user_id: UserId,
  pub actor_id: UserId,
  #[serde(default)]
  pub page_id: Option<PageId>,
  #[serde(default)]
  pub block_id: Option<BlockId>,
  #[serde(default)]
  pub comment_id: Option<CommentId>,
  #[serde(default)]
  pub content: Option<String>,
  #[serde(default)]
  pub read: bool,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_at: DateTime<Utc>,
}

impl Record for Activity {
  const FAMILY: &'static str = ACTIVITIES;

  fn id(&self) -> &str {
    &self.id
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityParams {
  #[serde(rename = "type")]
  pub ty: ActivityType,
  pub user_id: UserId,
  pub actor_id: UserId,
  #[serde(default)]
  pub page_id: Option<PageId>,
  #[serde(default)]
  pub block_id: Option<BlockId>,
  #[serde(default)]
  pub comment_id: Option<CommentId>,
  #[serde(default)]
  pub content: Option<String>,
}

impl CreateActivityParams {
  pub fn new<T: Into<String>>(ty: ActivityType, user_id: T, actor_id: T) -> Self {
    Self {
      ty,
      user_id: user_id.into(),
      actor_id: actor_id.into(),
      page_id: None,
      block_id: None,
      comment_id: None,
      content: None,
    }
  }

  pub fn with_page(self, page_id: Option<PageId>) -> Self {
    Self { page_id, ..self }
  }

  pub fn with_block(self, block_id: Option<BlockId>) -> Self {
    Self { block_id, ..self }
  }

  pub fn with_comment(self, comment_id: Option<CommentId>) -> Self {
    Self { comment_id, ..self }
  }

  pub fn with_content<T: Into<String>>(self, content: T) -> Self {
    Self {
      content: Some(content.into()),
      ..self
    }
  }

  pub fn into_activity(self, now: DateTime<Utc>) -> Activity {
    Activity {
      id: generate_id(),
      ty: self.ty,
      user_id: self.user_id,
      actor_id: self.actor_id,
      page_id: self.page_id,
      block_id: self.block_id,
      comment_id: self.comment_id,
      content: self.content,
      read: false,
      created_at: now,
    }
  }
}
