use std::ops::Deref;
use std::path::Path;
use std::sync::Once;

use notebook_entity::CreatePageParams;
use notebook_folder::Folder;
use notebook_persistence::{NotebookStore, StorageConfig};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;

pub struct FolderTest {
  folder: Folder,
  pub store: NotebookStore,
  cleaner: TempDir,
}

impl FolderTest {
  pub fn new() -> Self {
    setup_log();
    let tempdir = TempDir::new().unwrap();
    let store = NotebookStore::open(&StorageConfig::new(tempdir.path()));
    Self {
      folder: Folder::new(&store),
      store,
      cleaner: tempdir,
    }
  }

  /// Creates `p1` (root) with children `p2` and `p3`, and a second root `p4`.
  pub async fn with_tree() -> Self {
    let test = Self::new();
    test.create(CreatePageParams::new("p1", "Projects")).await;
    test
      .create(CreatePageParams::new("p2", "Roadmap").with_parent("p1"))
      .await;
    test
      .create(CreatePageParams::new("p3", "Retro").with_parent("p1"))
      .await;
    test.create(CreatePageParams::new("p4", "Journal")).await;
    test
  }

  pub fn data_dir(&self) -> &Path {
    self.cleaner.path()
  }

  pub async fn create(&self, params: CreatePageParams) {
    self.folder.create_page(params).await.unwrap();
  }

  pub async fn page_ids(&self) -> Vec<String> {
    self
      .store
      .pages
      .load_all()
      .await
      .unwrap()
      .into_iter()
      .map(|page| page.id)
      .collect()
  }
}

impl Deref for FolderTest {
  type Target = Folder;

  fn deref(&self) -> &Self::Target {
    &self.folder
  }
}

pub fn setup_log() {
  static START: Once = Once::new();
  START.call_once(|| {
    unsafe {
      std::env::set_var("RUST_LOG", "notebook_folder=debug");
    }
    let subscriber = Subscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_ansi(true)
      .finish();
    subscriber.try_init().unwrap();
  });
}
