use chrono::Utc;
use notebook_entity::{CreatePageParams, Page, PageUpdate};
use serde_json::json;

fn make_page() -> Page {
  CreatePageParams::new("p2", "Child")
    .with_parent("p1")
    .with_block_ids(vec!["b1".to_string()])
    .into_page(Utc::now())
}

#[test]
fn page_uses_camel_case_keys_test() {
  let value = serde_json::to_value(make_page()).unwrap();
  assert_eq!(value["parentId"], json!("p1"));
  assert_eq!(value["blockIds"], json!(["b1"]));
  assert_eq!(value["isFavorite"], json!(false));
  assert_eq!(value["isPrivate"], json!(false));
  assert!(value.get("createdAt").is_some());
  assert!(value.get("updatedAt").is_some());
}

#[test]
fn absent_parent_leaves_parent_untouched_test() {
  let mut page = make_page();
  let update: PageUpdate = serde_json::from_value(json!({"title": "Renamed"})).unwrap();
  assert_eq!(update.parent_id, None);
  update.apply_to(&mut page);

  assert_eq!(page.title, "Renamed");
  assert_eq!(page.parent_id.as_deref(), Some("p1"));
}

#[test]
fn null_parent_turns_page_into_root_test() {
  let mut page = make_page();
  let update: PageUpdate = serde_json::from_value(json!({"parentId": null})).unwrap();
  assert_eq!(update.parent_id, Some(None));
  assert_eq!(update.new_parent_id(), None);
  update.apply_to(&mut page);

  assert!(page.is_root());
}

#[test]
fn update_builder_sets_flags_test() {
  let mut page = make_page();
  PageUpdate::new()
    .with_favorite(true)
    .with_private(true)
    .with_block_ids(vec![])
    .apply_to(&mut page);

  assert!(page.is_favorite);
  assert!(page.is_private);
  assert!(page.block_ids.is_empty());
}

#[test]
fn page_without_optional_fields_deserializes_test() {
  let page: Page = serde_json::from_value(json!({
    "id": "p1",
    "title": "Home",
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z"
  }))
  .unwrap();
  assert!(page.is_root());
  assert!(page.block_ids.is_empty());
  assert!(!page.is_favorite);
}
