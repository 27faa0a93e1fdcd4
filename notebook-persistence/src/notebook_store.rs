use std::sync::Arc;

use notebook_entity::{Activity, Block, Comment, Page, PageShare, User};
use tracing::debug;

use crate::{JsonFileStore, PersistenceError, RecordStore, StorageConfig};

/// One store per record family, built once at startup and handed to every
/// manager that needs it.
#[derive(Clone)]
pub struct NotebookStore {
  pub pages: Arc<dyn RecordStore<Page>>,
  pub blocks: Arc<dyn RecordStore<Block>>,
  pub comments: Arc<dyn RecordStore<Comment>>,
  pub shares: Arc<dyn RecordStore<PageShare>>,
  pub activities: Arc<dyn RecordStore<Activity>>,
  pub users: Arc<dyn RecordStore<User>>,
}

impl NotebookStore {
  /// File-backed stores under `config.data_dir`. Nothing touches the disk
  /// until [NotebookStore::init] or the first read.
  pub fn open(config: &StorageConfig) -> Self {
    Self {
      pages: Arc::new(JsonFileStore::<Page>::new(config)),
      blocks: Arc::new(JsonFileStore::<Block>::new(config)),
      comments: Arc::new(JsonFileStore::<Comment>::new(config)),
      shares: Arc::new(JsonFileStore::<PageShare>::new(config)),
      activities: Arc::new(JsonFileStore::<Activity>::new(config)),
      users: Arc::new(JsonFileStore::<User>::new(config)),
    }
  }

  /// Creates every missing family file as an empty array.
  pub async fn init(&self) -> Result<(), PersistenceError> {
    self.pages.init().await?;
    self.blocks.init().await?;
    self.comments.init().await?;
    self.shares.init().await?;
    self.activities.init().await?;
    self.users.init().await?;
    debug!("notebook store initialized");
    Ok(())
  }
}
