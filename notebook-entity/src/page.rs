use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define::{BlockId, PAGES, PageId, Record, UserId};
use crate::util::{deserialize_some, deserialize_timestamp};

/// A page in the workspace. Pages form a forest through `parent_id`; a page
/// without a parent is a root page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
  pub id: PageId,
  pub title: String,
  #[serde(default)]
  pub icon: Option<String>,
  #[serde(default)]
  pub cover: Option<String>,
  #[serde(default)]
  pub parent_id: Option<PageId>,
  /// Ordered ids of the blocks shown on this page. Entries may refer to
  /// blocks that have since been deleted.
  #[serde(default)]
  pub block_ids: Vec<BlockId>,
  #[serde(default)]
  pub is_favorite: bool,
  #[serde(default)]
  pub is_private: bool,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub created_at: DateTime<Utc>,
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub updated_at: DateTime<Utc>,
  #[serde(default)]
  pub created_by: Option<UserId>,
}

impl Page {
  pub fn is_root(&self) -> bool {
    self.parent_id.is_none()
  }

  pub fn is_child_of(&self, parent_id: &str) -> bool {
    self.parent_id.as_deref() == Some(parent_id)
  }

  pub fn contains_block(&self, block_id: &str) -> bool {
    self.block_ids.iter().any(|id| id == block_id)
  }
}

impl Record for Page {
  const FAMILY: &'static str = PAGES;

  fn id(&self) -> &str {
    &self.id
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageParams {
  pub id: PageId,
  pub title: String,
  #[serde(default)]
  pub icon: Option<String>,
  #[serde(default)]
  pub cover: Option<String>,
  #[serde(default)]
  pub parent_id: Option<PageId>,
  #[serde(default)]
  pub block_ids: Vec<BlockId>,
  #[serde(default)]
  pub is_favorite: bool,
  #[serde(default)]
  pub is_private: bool,
  #[serde(default)]
  pub created_by: Option<UserId>,
}

impl CreatePageParams {
  pub fn new<T: Into<String>>(id: T, title: T) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      icon: None,
      cover: None,
      parent_id: None,
      block_ids: vec![],
      is_favorite: false,
      is_private: false,
      created_by: None,
    }
  }

  pub fn with_parent<T: Into<String>>(self, parent_id: T) -> Self {
    Self {
      parent_id: Some(parent_id.into()),
      ..self
    }
  }

  pub fn with_block_ids(self, block_ids: Vec<BlockId>) -> Self {
    Self { block_ids, ..self }
  }

  pub fn with_favorite(self, is_favorite: bool) -> Self {
    Self {
      is_favorite,
      ..self
    }
  }

  pub fn with_private(self, is_private: bool) -> Self {
    Self { is_private, ..self }
  }

  pub fn into_page(self, now: DateTime<Utc>) -> Page {
    Page {
      id: self.id,
      title: self.title,
      icon: self.icon,
      cover: self.cover,
      parent_id: self.parent_id,
      block_ids: self.block_ids,
      is_favorite: self.is_favorite,
      is_private: self.is_private,
      created_at: now,
      updated_at: now,
      created_by: self.created_by,
    }
  }
}

/// Partial update of a [Page].
///
/// Fields left as `None` are not touched. The nullable fields use a nested
/// option: `Some(None)` clears the stored value, e.g. `parentId: null` turns
/// the page into a root page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub icon: Option<Option<String>>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub cover: Option<Option<String>>,
  #[serde(
    default,
    deserialize_with = "deserialize_some",
    skip_serializing_if = "Option::is_none"
  )]
  pub parent_id: Option<Option<PageId>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub block_ids: Option<Vec<BlockId>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_favorite: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_private: Option<bool>,
}

impl PageUpdate {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_title<T: Into<String>>(self, title: T) -> Self {
    Self {
      title: Some(title.into()),
      ..self
    }
  }

  pub fn with_icon(self, icon: Option<String>) -> Self {
    Self {
      icon: Some(icon),
      ..self
    }
  }

  pub fn with_parent(self, parent_id: Option<PageId>) -> Self {
    Self {
      parent_id: Some(parent_id),
      ..self
    }
  }

  pub fn with_block_ids(self, block_ids: Vec<BlockId>) -> Self {
    Self {
      block_ids: Some(block_ids),
      ..self
    }
  }

  pub fn with_favorite(self, is_favorite: bool) -> Self {
    Self {
      is_favorite: Some(is_favorite),
      ..self
    }
  }

  pub fn with_private(self, is_private: bool) -> Self {
    Self {
      is_private: Some(is_private),
      ..self
    }
  }

  /// The parent the update wants to attach the page to, if any.
  pub fn new_parent_id(&self) -> Option<&str> {
    self.parent_id.as_ref().and_then(|parent| parent.as_deref())
  }

  /// Shallow-merges the supplied fields into `page`. Timestamps are left to
  /// the caller.
  pub fn apply_to(self, page: &mut Page) {
    if let Some(title) = self.title {
      page.title = title;
    }
    if let Some(icon) = self.icon {
      page.icon = icon;
    }
    if let Some(cover) = self.cover {
      page.cover = cover;
    }
    if let Some(parent_id) = self.parent_id {
      page.parent_id = parent_id;
    }
    if let Some(block_ids) = self.block_ids {
      page.block_ids = block_ids;
    }
    if let Some(is_favorite) = self.is_favorite {
      page.is_favorite = is_favorite;
    }
    if let Some(is_private) = self.is_private {
      page.is_private = is_private;
    }
  }
}
