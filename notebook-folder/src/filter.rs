use notebook_entity::Page;
use notebook_entity::define::PageId;
use serde::{Deserialize, Serialize};

/// Narrows a page listing. At most one filter applies per listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageFilter {
  #[default]
  All,
  Favorites,
  Private,
  /// Pages that are not private.
  Workspace,
  Root,
  ChildrenOf(PageId),
}

impl PageFilter {
  pub fn matches(&self, page: &Page) -> bool {
    match self {
      PageFilter::All => true,
      PageFilter::Favorites => page.is_favorite,
      PageFilter::Private => page.is_private,
      PageFilter::Workspace => !page.is_private,
      PageFilter::Root => page.is_root(),
      PageFilter::ChildrenOf(parent_id) => page.is_child_of(parent_id),
    }
  }
}

/// The listing flags as a client sends them. Several flags may be set at
/// once; [PageQuery::into_filter] picks the one that wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
  #[serde(default)]
  pub favorites: Option<bool>,
  #[serde(default)]
  pub private: Option<bool>,
  #[serde(default)]
  pub parent_id: Option<PageId>,
  #[serde(default)]
  pub root_only: Option<bool>,
}

impl PageQuery {
  /// Precedence: favorites, then private/workspace, then root only, then
  /// children of a parent. `favorites=false` and `root_only=false` are the
  /// same as not asking.
  pub fn into_filter(self) -> PageFilter {
    if self.favorites == Some(true) {
      return PageFilter::Favorites;
    }
    match self.private {
      Some(true) => return PageFilter::Private,
      Some(false) => return PageFilter::Workspace,
      None => {},
    }
    if self.root_only == Some(true) {
      return PageFilter::Root;
    }
    match self.parent_id {
      Some(parent_id) => PageFilter::ChildrenOf(parent_id),
      None => PageFilter::All,
    }
  }
}
