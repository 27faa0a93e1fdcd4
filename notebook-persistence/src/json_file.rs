use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use notebook_entity::define::Record;
use tokio::fs;
use tracing::trace;

use crate::{PersistenceError, RecordStore, StorageConfig};

/// Keeps a record family as a single JSON array in `<data_dir>/<family>.json`.
/// The directory and an empty `[]` file are created on first access.
pub struct JsonFileStore<T> {
  path: PathBuf,
  pretty: bool,
  phantom: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
  pub fn new(config: &StorageConfig) -> Self {
    Self {
      path: config.family_path(T::FAMILY),
      pretty: config.pretty_json,
      phantom: PhantomData,
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  async fn ensure_file(&self) -> Result<(), PersistenceError> {
    match fs::metadata(&self.path).await {
      Ok(_) => Ok(()),
      Err(err) if err.kind() == ErrorKind::NotFound => {
        if let Some(dir) = self.path.parent() {
          fs::create_dir_all(dir)
            .await
            .map_err(|err| PersistenceError::io(T::FAMILY, err))?;
        }
        fs::write(&self.path, "[]")
          .await
          .map_err(|err| PersistenceError::io(T::FAMILY, err))
      },
      Err(err) => Err(PersistenceError::io(T::FAMILY, err)),
    }
  }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
  async fn load_all(&self) -> Result<Vec<T>, PersistenceError> {
    self.ensure_file().await?;
    let json = fs::read_to_string(&self.path)
      .await
      .map_err(|err| PersistenceError::io(T::FAMILY, err))?;
    let records: Vec<T> =
      serde_json::from_str(&json).map_err(|err| PersistenceError::serde_json(T::FAMILY, err))?;
    trace!("[{}] loaded {} records", T::FAMILY, records.len());
    Ok(records)
  }

  async fn save_all(&self, records: &[T]) -> Result<(), PersistenceError> {
    self.ensure_file().await?;
    let json = if self.pretty {
      serde_json::to_string_pretty(records)
    } else {
      serde_json::to_string(records)
    }
    .map_err(|err| PersistenceError::serde_json(T::FAMILY, err))?;
    fs::write(&self.path, json)
      .await
      .map_err(|err| PersistenceError::io(T::FAMILY, err))?;
    trace!("[{}] saved {} records", T::FAMILY, records.len());
    Ok(())
  }

  async fn init(&self) -> Result<(), PersistenceError> {
    self.ensure_file().await
  }
}
