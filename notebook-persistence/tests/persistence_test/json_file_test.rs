use assert_matches2::assert_matches;
use chrono::Utc;
use notebook_entity::{CreatePageParams, Page};
use notebook_persistence::{JsonFileStore, PersistenceError, RecordStore, StorageConfig};

use crate::util::StoreTest;

fn page(id: &str) -> Page {
  CreatePageParams::new(id, "Untitled").into_page(Utc::now())
}

#[tokio::test]
async fn first_read_creates_empty_family_file_test() {
  let test = StoreTest::new();
  let store = JsonFileStore::<Page>::new(&test.config);
  assert!(!store.path().exists());

  let pages = store.load_all().await.unwrap();
  assert!(pages.is_empty());
  assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
  assert!(store.path().ends_with("pages.json"));
}

#[tokio::test]
async fn save_replaces_whole_collection_in_order_test() {
  let test = StoreTest::new();
  let store = JsonFileStore::<Page>::new(&test.config);
  store
    .save_all(&[page("c"), page("a"), page("b")])
    .await
    .unwrap();

  let ids: Vec<String> = store
    .load_all()
    .await
    .unwrap()
    .into_iter()
    .map(|page| page.id)
    .collect();
  assert_eq!(ids, vec!["c", "a", "b"]);

  store.save_all(&[page("z")]).await.unwrap();
  let pages = store.load_all().await.unwrap();
  assert_eq!(pages.len(), 1);
  assert_eq!(pages[0].id, "z");
}

#[tokio::test]
async fn lookup_by_id_test() {
  let test = StoreTest::new();
  let store = JsonFileStore::<Page>::new(&test.config);
  store.save_all(&[page("p1"), page("p2")]).await.unwrap();

  assert!(store.contains("p2").await.unwrap());
  assert!(!store.contains("p3").await.unwrap());
  assert_eq!(store.get("p1").await.unwrap().unwrap().id, "p1");
  assert!(store.get("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn compact_json_is_still_readable_test() {
  let test = StoreTest::new();
  let config = StorageConfig::new(test.config.data_dir.clone()).pretty_json(false);
  let store = JsonFileStore::<Page>::new(&config);
  store.save_all(&[page("p1")]).await.unwrap();

  let raw = std::fs::read_to_string(store.path()).unwrap();
  assert!(!raw.contains('\n'));
  assert_eq!(store.load_all().await.unwrap()[0].id, "p1");
}

#[tokio::test]
async fn corrupted_file_reports_family_test() {
  let test = StoreTest::new();
  let store = JsonFileStore::<Page>::new(&test.config);
  store.init().await.unwrap();
  std::fs::write(store.path(), "{ not json").unwrap();

  let err = store.load_all().await.unwrap_err();
  assert_matches!(err, PersistenceError::SerdeJson { family: "pages", .. });
}
