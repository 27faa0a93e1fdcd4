use std::sync::Arc;

use notebook_entity::define::timestamp;
use notebook_entity::{ActivityType, CreateActivityParams, CreateShareParams, PageShare};
use notebook_persistence::{NotebookStore, RecordStore};
use tracing::{error, instrument};

use crate::{Activities, CollaborationError};

/// Page shares. Shares are records only; nothing checks them on access.
#[derive(Clone)]
pub struct Shares {
  shares: Arc<dyn RecordStore<PageShare>>,
  activities: Activities,
}

impl Shares {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.shares.clone(), Activities::new(store))
  }

  pub fn from_store(shares: Arc<dyn RecordStore<PageShare>>, activities: Activities) -> Self {
    Self { shares, activities }
  }

  pub async fn get_page_shares(&self, page_id: &str) -> Result<Vec<PageShare>, CollaborationError> {
    let shares = self.shares.load_all().await?;
    Ok(
      shares
        .into_iter()
        .filter(|share| share.page_id == page_id)
        .collect(),
    )
  }

  /// Stores the share and tells the target user about it. Link shares have
  /// no target user and notify nobody.
  #[instrument(level = "debug", skip_all, fields(page_id = %params.page_id))]
  pub async fn create_share(
    &self,
    params: CreateShareParams,
  ) -> Result<PageShare, CollaborationError> {
    let mut shares = self.shares.load_all().await?;
    let share = params.into_share(timestamp());
    shares.push(share.clone());
    self.shares.save_all(&shares).await?;

    if let Some(user_id) = &share.user_id {
      let params =
        CreateActivityParams::new(ActivityType::PageShared, user_id, &share.created_by)
          .with_page(Some(share.page_id.clone()))
          .with_content(format!("Page shared with {} access", share.role));
      if let Err(err) = self.activities.create_activity(params).await {
        error!("Failed to notify {} about share {}: {}", user_id, share.id, err);
      }
    }
    Ok(share)
  }

  #[instrument(level = "debug", skip_all, fields(share_id = %share_id))]
  pub async fn delete_share(&self, share_id: &str) -> Result<(), CollaborationError> {
    let mut shares = self.shares.load_all().await?;
    let index = shares
      .iter()
      .position(|share| share.id == share_id)
      .ok_or_else(|| CollaborationError::ShareNotFound(share_id.to_string()))?;
    shares.remove(index);
    self.shares.save_all(&shares).await?;
    Ok(())
  }
}
