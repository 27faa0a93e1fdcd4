use std::sync::Arc;

use notebook_entity::define::{BlockId, PageId, timestamp};
use notebook_entity::util::truncate_chars;
use notebook_entity::{
  ActivityType, Comment, CommentUpdate, CreateActivityParams, CreateCommentParams,
};
use notebook_persistence::{NotebookStore, RecordStore};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use crate::{Activities, CollaborationError};

/// Maximum number of characters of a comment copied into its notifications.
pub const ACTIVITY_SNIPPET_LEN: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommentFilter {
  /// Every comment, resolved or not.
  #[default]
  All,
  /// Unresolved comments attached to the block.
  Block(BlockId),
  /// Page level discussion: comments on the page that are not attached to a
  /// block.
  Page(PageId),
}

impl CommentFilter {
  pub fn matches(&self, comment: &Comment) -> bool {
    match self {
      CommentFilter::All => true,
      CommentFilter::Block(block_id) => {
        comment.block_id.as_deref() == Some(block_id.as_str()) && !comment.resolved
      },
      CommentFilter::Page(page_id) => comment.is_discussion_of(page_id),
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentQuery {
  #[serde(default)]
  pub block_id: Option<BlockId>,
  #[serde(default)]
  pub page_id: Option<PageId>,
}

impl CommentQuery {
  /// A block id wins over a page id. Empty ids count as absent.
  pub fn into_filter(self) -> CommentFilter {
    let block_id = self.block_id.filter(|id| !id.is_empty());
    let page_id = self.page_id.filter(|id| !id.is_empty());
    match (block_id, page_id) {
      (Some(block_id), _) => CommentFilter::Block(block_id),
      (None, Some(page_id)) => CommentFilter::Page(page_id),
      (None, None) => CommentFilter::All,
    }
  }
}

#[derive(Clone)]
pub struct Comments {
  comments: Arc<dyn RecordStore<Comment>>,
  activities: Activities,
}

impl Comments {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.comments.clone(), Activities::new(store))
  }

  pub fn from_store(comments: Arc<dyn RecordStore<Comment>>, activities: Activities) -> Self {
    Self {
      comments,
      activities,
    }
  }

  pub async fn get_comments(
    &self,
    filter: &CommentFilter,
  ) -> Result<Vec<Comment>, CollaborationError> {
    let comments = self.comments.load_all().await?;
    Ok(
      comments
        .into_iter()
        .filter(|comment| filter.matches(comment))
        .collect(),
    )
  }

  pub async fn get_comment(&self, comment_id: &str) -> Result<Comment, CollaborationError> {
    self
      .comments
      .get(comment_id)
      .await?
      .ok_or_else(|| CollaborationError::CommentNotFound(comment_id.to_string()))
  }

  /// Stores the comment, then notifies every mentioned user and, for an
  /// attached comment, its author.
  ///
  /// The comment is durable before any notification is written. A failure
  /// while writing notifications is logged and does not fail the call.
  #[instrument(level = "debug", skip_all, fields(author_id = %params.author_id))]
  pub async fn create_comment(
    &self,
    params: CreateCommentParams,
  ) -> Result<Comment, CollaborationError> {
    let mut comments = self.comments.load_all().await?;
    let comment = params.into_comment(timestamp());
    comments.push(comment.clone());
    self.comments.save_all(&comments).await?;

    if let Err(err) = self
      .activities
      .create_activities(comment_activities(&comment))
      .await
    {
      error!("Failed to notify about comment {}: {}", comment.id, err);
    }
    Ok(comment)
  }

  /// Merges `update` and refreshes `updated_at`.
  #[instrument(level = "debug", skip_all, fields(comment_id = %comment_id))]
  pub async fn update_comment(
    &self,
    comment_id: &str,
    update: CommentUpdate,
  ) -> Result<Comment, CollaborationError> {
    let mut comments = self.comments.load_all().await?;
    let comment = comments
      .iter_mut()
      .find(|comment| comment.id == comment_id)
      .ok_or_else(|| CollaborationError::CommentNotFound(comment_id.to_string()))?;
    update.apply_to(comment);
    comment.updated_at = timestamp();
    let comment = comment.clone();

    self.comments.save_all(&comments).await?;
    Ok(comment)
  }

  pub async fn resolve_comment(&self, comment_id: &str) -> Result<Comment, CollaborationError> {
    self
      .update_comment(comment_id, CommentUpdate::resolve())
      .await
  }

  #[instrument(level = "debug", skip_all, fields(comment_id = %comment_id))]
  pub async fn delete_comment(&self, comment_id: &str) -> Result<(), CollaborationError> {
    let mut comments = self.comments.load_all().await?;
    let index = comments
      .iter()
      .position(|comment| comment.id == comment_id)
      .ok_or_else(|| CollaborationError::CommentNotFound(comment_id.to_string()))?;
    comments.remove(index);
    self.comments.save_all(&comments).await?;
    Ok(())
  }
}

fn comment_activities(comment: &Comment) -> Vec<CreateActivityParams> {
  let snippet = truncate_chars(&comment.content, ACTIVITY_SNIPPET_LEN);
  let activity = |ty: ActivityType, user_id: &str| {
    CreateActivityParams::new(ty, user_id, comment.author_id.as_str())
      .with_page(comment.page_id.clone())
      .with_block(comment.block_id.clone())
      .with_comment(Some(comment.id.clone()))
      .with_content(snippet.as_str())
  };

  let mut activities = comment
    .mentions
    .iter()
    .map(|user_id| activity(ActivityType::Mention, user_id.as_str()))
    .collect::<Vec<_>>();
  // There is no page owner to notify yet, so the author is told about their
  // own comment.
  if comment.is_attached() {
    activities.push(activity(ActivityType::Comment, comment.author_id.as_str()));
  }
  activities
}
