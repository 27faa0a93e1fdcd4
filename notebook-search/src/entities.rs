use notebook_entity::define::PageId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
  #[default]
  All,
  Page,
  Block,
}

impl SearchScope {
  pub fn includes_pages(&self) -> bool {
    matches!(self, SearchScope::All | SearchScope::Page)
  }

  pub fn includes_blocks(&self) -> bool {
    matches!(self, SearchScope::All | SearchScope::Block)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
  pub q: String,
  #[serde(default, rename = "type")]
  pub scope: SearchScope,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
  Page,
  Block,
}

/// One hit. Page hits carry `title` and `parent_id`; block hits carry
/// `content` and the `page_id` of the first page listing the block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
  pub id: String,
  #[serde(rename = "type")]
  pub ty: SearchResultType,
  pub title: Option<String>,
  pub content: Option<String>,
  pub page_id: Option<PageId>,
  pub parent_id: Option<PageId>,
  pub highlight: Option<String>,
}
