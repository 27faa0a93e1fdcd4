use std::sync::Arc;

use notebook_entity::util::truncate_chars;
use notebook_entity::{Block, Page};
use notebook_persistence::{NotebookStore, RecordStore};
use tracing::debug;

use crate::highlight::{find, fold, highlight};
use crate::{SearchError, SearchResult, SearchResultType, SearchScope};

/// Characters of a block's text copied into its result.
pub const BLOCK_CONTENT_CHARS: usize = 200;

/// Case-insensitive substring search over page titles and block text.
///
/// There is no index and no ranking: results follow store order, pages
/// before blocks.
#[derive(Clone)]
pub struct SearchEngine {
  pages: Arc<dyn RecordStore<Page>>,
  blocks: Arc<dyn RecordStore<Block>>,
}

impl SearchEngine {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.pages.clone(), store.blocks.clone())
  }

  pub fn from_store(
    pages: Arc<dyn RecordStore<Page>>,
    blocks: Arc<dyn RecordStore<Block>>,
  ) -> Self {
    Self { pages, blocks }
  }

  pub async fn search(
    &self,
    query: &str,
    scope: SearchScope,
  ) -> Result<Vec<SearchResult>, SearchError> {
    let needle = fold(query);
    let pages = self.pages.load_all().await?;
    let mut results = vec![];

    if scope.includes_pages() {
      results.extend(
        pages
          .iter()
          .filter(|page| find(&fold(&page.title), &needle).is_some())
          .map(page_result),
      );
    }

    if scope.includes_blocks() {
      let blocks = self.blocks.load_all().await?;
      for block in &blocks {
        let Some(text) = block.text() else {
          continue;
        };
        if find(&fold(text), &needle).is_none() {
          continue;
        }
        let page_id = pages
          .iter()
          .find(|page| page.contains_block(&block.id))
          .map(|page| page.id.clone());
        results.push(SearchResult {
          id: block.id.clone(),
          ty: SearchResultType::Block,
          title: None,
          content: Some(truncate_chars(text, BLOCK_CONTENT_CHARS)),
          page_id,
          parent_id: None,
          highlight: Some(highlight(text, query)),
        });
      }
    }

    debug!("search {:?} in {:?}: {} results", query, scope, results.len());
    Ok(results)
  }
}

fn page_result(page: &Page) -> SearchResult {
  SearchResult {
    id: page.id.clone(),
    ty: SearchResultType::Page,
    title: Some(page.title.clone()),
    content: None,
    page_id: None,
    parent_id: page.parent_id.clone(),
    highlight: Some(page.title.clone()),
  }
}
