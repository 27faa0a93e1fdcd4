use std::sync::Arc;

use notebook_collaboration::Collaboration;
use notebook_document::BlockCollection;
use notebook_folder::Folder;
use notebook_persistence::NotebookStore;
use notebook_search::SearchEngine;

pub type SharedState = Arc<AppState>;

/// The managers every handler works through, all sharing one store.
pub struct AppState {
  pub folder: Folder,
  pub blocks: BlockCollection,
  pub collab: Collaboration,
  pub search: SearchEngine,
}

impl AppState {
  pub fn new(store: &NotebookStore) -> SharedState {
    Arc::new(Self {
      folder: Folder::new(store),
      blocks: BlockCollection::new(store),
      collab: Collaboration::new(store),
      search: SearchEngine::new(store),
    })
  }
}
