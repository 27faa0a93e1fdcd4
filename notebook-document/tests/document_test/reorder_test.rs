use assert_matches2::assert_matches;
use notebook_document::DocumentError;

use crate::util::DocumentTest;

fn ids(ids: &[&str]) -> Vec<String> {
  ids.iter().map(|id| id.to_string()).collect()
}

#[tokio::test]
async fn reorder_with_full_permutation_test() {
  let test = DocumentTest::with_paragraphs(&["b1", "b2", "b3"]).await;
  let reordered = test.reorder_blocks(ids(&["b3", "b1", "b2"])).await.unwrap();

  let returned: Vec<String> = reordered.into_iter().map(|block| block.id).collect();
  assert_eq!(returned, vec!["b3", "b1", "b2"]);
  assert_eq!(test.block_ids().await, vec!["b3", "b1", "b2"]);
}

#[tokio::test]
async fn reorder_with_missing_id_is_rejected_test() {
  let test = DocumentTest::with_paragraphs(&["b1", "b2", "b3"]).await;
  assert_matches!(
    test.reorder_blocks(ids(&["b3", "b1"])).await,
    Err(DocumentError::InvalidReorder(_))
  );
  assert_eq!(test.block_ids().await, vec!["b1", "b2", "b3"]);
}

#[tokio::test]
async fn reorder_with_extra_id_is_rejected_test() {
  let test = DocumentTest::with_paragraphs(&["b1", "b2"]).await;
  assert_matches!(
    test.reorder_blocks(ids(&["b2", "b1", "b9"])).await,
    Err(DocumentError::InvalidReorder(_))
  );
  assert_eq!(test.block_ids().await, vec!["b1", "b2"]);
}

#[tokio::test]
async fn reorder_with_repeated_id_is_rejected_test() {
  let test = DocumentTest::with_paragraphs(&["b1", "b2"]).await;
  assert_matches!(
    test.reorder_blocks(ids(&["b1", "b1"])).await,
    Err(DocumentError::InvalidReorder(_))
  );
  assert_eq!(test.block_ids().await, vec!["b1", "b2"]);
}

#[tokio::test]
async fn reorder_empty_collection_test() {
  let test = DocumentTest::new();
  assert!(test.reorder_blocks(vec![]).await.unwrap().is_empty());
}
