use std::sync::Arc;

use notebook_entity::define::timestamp;
use notebook_entity::{Activity, CreateActivityParams};
use notebook_persistence::{NotebookStore, RecordStore};
use tracing::{debug, instrument};

use crate::CollaborationError;

/// Notification inbox of every user. Activities are only ever appended; the
/// `read` flag is the one field that changes afterwards.
#[derive(Clone)]
pub struct Activities {
  activities: Arc<dyn RecordStore<Activity>>,
}

impl Activities {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.activities.clone())
  }

  pub fn from_store(activities: Arc<dyn RecordStore<Activity>>) -> Self {
    Self { activities }
  }

  pub async fn create_activity(
    &self,
    params: CreateActivityParams,
  ) -> Result<Activity, CollaborationError> {
    let mut activities = self.create_activities(vec![params]).await?;
    activities
      .pop()
      .ok_or_else(|| anyhow::anyhow!("activity was not created").into())
  }

  /// Appends all `params` with a single write. Nothing is written for an
  /// empty batch.
  #[instrument(level = "debug", skip_all, fields(count = params.len()))]
  pub async fn create_activities(
    &self,
    params: Vec<CreateActivityParams>,
  ) -> Result<Vec<Activity>, CollaborationError> {
    if params.is_empty() {
      return Ok(vec![]);
    }

    let mut activities = self.activities.load_all().await?;
    let now = timestamp();
    let created = params
      .into_iter()
      .map(|params| params.into_activity(now))
      .collect::<Vec<_>>();
    activities.extend(created.iter().cloned());
    self.activities.save_all(&activities).await?;
    Ok(created)
  }

  /// Activities addressed to `user_id`, newest first. Activities created at
  /// the same instant are returned latest-inserted first.
  pub async fn list_activities(
    &self,
    user_id: &str,
    unread_only: bool,
  ) -> Result<Vec<Activity>, CollaborationError> {
    let mut activities = self
      .activities
      .load_all()
      .await?
      .into_iter()
      .filter(|activity| activity.user_id == user_id)
      .filter(|activity| !unread_only || !activity.read)
      .collect::<Vec<_>>();
    activities.reverse();
    activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(activities)
  }

  pub async fn mark_read(&self, activity_id: &str) -> Result<Activity, CollaborationError> {
    let mut activities = self.activities.load_all().await?;
    let activity = activities
      .iter_mut()
      .find(|activity| activity.id == activity_id)
      .ok_or_else(|| CollaborationError::ActivityNotFound(activity_id.to_string()))?;
    activity.read = true;
    let activity = activity.clone();

    self.activities.save_all(&activities).await?;
    Ok(activity)
  }

  /// Marks every unread activity of `user_id` as read and returns how many
  /// changed. Skips the write entirely when nothing changed.
  #[instrument(level = "debug", skip(self))]
  pub async fn mark_all_read(&self, user_id: &str) -> Result<usize, CollaborationError> {
    let mut activities = self.activities.load_all().await?;
    let mut count = 0;
    for activity in activities
      .iter_mut()
      .filter(|activity| activity.user_id == user_id && !activity.read)
    {
      activity.read = true;
      count += 1;
    }

    if count > 0 {
      self.activities.save_all(&activities).await?;
    }
    debug!("marked {} activities as read", count);
    Ok(count)
  }
}
