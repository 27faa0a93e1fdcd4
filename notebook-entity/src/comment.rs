use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define::{BlockId, COMMENTS, CommentId, PageId, Record, UserId, generate_id};
use crate::util::deserialize_timestamp;

/// A comment either annotates a block (`block_id`) or takes part in a page
/// level discussion (`page_id` without `block_id`). Replies point at the
/// comment they answer through `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id: CommentId,
  #[serde(default)]
  pub block_id: Option<BlockId>,
  #[serde(default)]
  pub page_id: Option<PageId>,
  pub content: String,
  pub author_id: UserId,
  #[serde(default)]
  pub mentions: Vec<UserId>,
  #[serde(default)]
  pub resolved: bool,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_at: DateTime<Utc>,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub updated_at: DateTime<Utc>,
  #[serde(default)]
  pub parent_id: Option<CommentId>,
}

impl Comment {
  pub fn is_attached(&self) -> bool {
    self.block_id.is_some() || self.page_id.is_some()
  }

  pub fn is_discussion_of(&self, page_id: &str) -> bool {
    self.block_id.is_none() && self.page_id.as_deref() == Some(page_id)
  }
}

impl Record for Comment {
  const FAMILY: &'static str = COMMENTS;

  fn id(&self) -> &str {
    &self.id
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentParams {
  #[serde(default)]
  pub block_id: Option<BlockId>,
  #[serde(default)]
  pub page_id: Option<PageId>,
  pub content: String,
  pub author_id: UserId,
  #[serde(default)]
  pub mentions: Vec<UserId>,
  #[serde(default)]
  pub parent_id: Option<CommentId>,
}

impl CreateCommentParams {
  pub fn new<T: Into<String>>(author_id: T, content: T) -> Self {
    Self {
      block_id: None,
      page_id: None,
      content: content.into(),
      author_id: author_id.into(),
      mentions: vec![],
      parent_id: None,
    }
  }

  pub fn on_block<T: Into<String>>(self, block_id: T) -> Self {
    Self {
      block_id: Some(block_id.into()),
      ..self
    }
  }

  pub fn on_page<T: Into<String>>(self, page_id: T) -> Self {
    Self {
      page_id: Some(page_id.into()),
      ..self
    }
  }

  pub fn with_mentions(self, mentions: Vec<UserId>) -> Self {
    Self { mentions, ..self }
  }

  pub fn reply_to<T: Into<String>>(self, parent_id: T) -> Self {
    Self {
      parent_id: Some(parent_id.into()),
      ..self
    }
  }

  pub fn into_comment(self, now: DateTime<Utc>) -> Comment {
    Comment {
      id: generate_id(),
      block_id: self.block_id,
      page_id: self.page_id,
      content: self.content,
      author_id: self.author_id,
      mentions: self.mentions,
      resolved: false,
      created_at: now,
      updated_at: now,
      parent_id: self.parent_id,
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub resolved: Option<bool>,
}

impl CommentUpdate {
  pub fn resolve() -> Self {
    Self {
      content: None,
      resolved: Some(true),
    }
  }

  pub fn apply_to(self, comment: &mut Comment) {
    if let Some(content) = self.content {
      comment.content = content;
    }
    if let Some(resolved) = self.resolved {
      comment.resolved = resolved;
    }
  }
}
