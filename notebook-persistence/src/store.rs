use async_trait::async_trait;
use notebook_entity::define::Record;

use crate::PersistenceError;

/// Durable home of one record family.
///
/// Every read returns the whole collection in insertion order and every write
/// replaces it. Managers only ever go through this trait, so an indexed store
/// can replace the file-backed one without touching them.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
  async fn load_all(&self) -> Result<Vec<T>, PersistenceError>;

  async fn save_all(&self, records: &[T]) -> Result<(), PersistenceError>;

  /// Makes sure the backing medium exists, creating an empty collection when
  /// it does not.
  async fn init(&self) -> Result<(), PersistenceError> {
    Ok(())
  }

  async fn get(&self, id: &str) -> Result<Option<T>, PersistenceError> {
    let records = self.load_all().await?;
    Ok(records.into_iter().find(|record| record.id() == id))
  }

  async fn contains(&self, id: &str) -> Result<bool, PersistenceError> {
    let records = self.load_all().await?;
    Ok(records.iter().any(|record| record.id() == id))
  }
}
