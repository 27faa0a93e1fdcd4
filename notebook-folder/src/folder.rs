use std::sync::Arc;

use notebook_entity::define::{PageId, generate_id, timestamp};
use notebook_entity::{CreatePageParams, Page, PageUpdate};
use notebook_persistence::{NotebookStore, RecordStore};
use tracing::{debug, instrument};

use crate::{FolderError, PageFilter};

/// Manages the page forest: listing, parent links, move and duplicate.
///
/// Every call reloads the whole page collection and every mutation writes it
/// back. Parent existence is checked here, not by the store.
#[derive(Clone)]
pub struct Folder {
  pages: Arc<dyn RecordStore<Page>>,
}

impl Folder {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.pages.clone())
  }

  pub fn from_store(pages: Arc<dyn RecordStore<Page>>) -> Self {
    Self { pages }
  }

  /// Returns the pages matching `filter` in store order.
  pub async fn get_pages(&self, filter: &PageFilter) -> Result<Vec<Page>, FolderError> {
    let pages = self.pages.load_all().await?;
    Ok(
      pages
        .into_iter()
        .filter(|page| filter.matches(page))
        .collect(),
    )
  }

  pub async fn get_page(&self, page_id: &str) -> Result<Page, FolderError> {
    self
      .pages
      .get(page_id)
      .await?
      .ok_or_else(|| FolderError::PageNotFound(page_id.to_string()))
  }

  /// Direct children of `page_id`. Fails when the parent itself is missing.
  pub async fn get_children(&self, page_id: &str) -> Result<Vec<Page>, FolderError> {
    let pages = self.pages.load_all().await?;
    if !pages.iter().any(|page| page.id == page_id) {
      return Err(FolderError::PageNotFound(page_id.to_string()));
    }
    Ok(
      pages
        .into_iter()
        .filter(|page| page.is_child_of(page_id))
        .collect(),
    )
  }

  #[instrument(level = "debug", skip_all, fields(page_id = %params.id))]
  pub async fn create_page(&self, params: CreatePageParams) -> Result<Page, FolderError> {
    let mut pages = self.pages.load_all().await?;
    if pages.iter().any(|page| page.id == params.id) {
      return Err(FolderError::PageAlreadyExists(params.id));
    }
    if let Some(parent_id) = &params.parent_id {
      if !pages.iter().any(|page| &page.id == parent_id) {
        return Err(FolderError::ParentNotFound(parent_id.clone()));
      }
    }

    let page = params.into_page(timestamp());
    pages.push(page.clone());
    self.pages.save_all(&pages).await?;
    Ok(page)
  }

  /// Shallow-merges `update` into the page and refreshes `updated_at`.
  ///
  /// A new parent is validated before the page itself is looked up, so an
  /// update naming a missing parent is rejected even for a missing page.
  #[instrument(level = "debug", skip_all, fields(page_id = %page_id))]
  pub async fn update_page(&self, page_id: &str, update: PageUpdate) -> Result<Page, FolderError> {
    let mut pages = self.pages.load_all().await?;
    if let Some(parent_id) = update.new_parent_id() {
      if !pages.iter().any(|page| page.id == parent_id) {
        return Err(FolderError::ParentNotFound(parent_id.to_string()));
      }
    }

    let page = pages
      .iter_mut()
      .find(|page| page.id == page_id)
      .ok_or_else(|| FolderError::PageNotFound(page_id.to_string()))?;
    update.apply_to(page);
    page.updated_at = timestamp();
    let page = page.clone();

    self.pages.save_all(&pages).await?;
    Ok(page)
  }

  /// Removes the page. Its children are kept and become root pages.
  #[instrument(level = "debug", skip_all, fields(page_id = %page_id))]
  pub async fn delete_page(&self, page_id: &str) -> Result<(), FolderError> {
    let mut pages = self.pages.load_all().await?;
    let index = pages
      .iter()
      .position(|page| page.id == page_id)
      .ok_or_else(|| FolderError::PageNotFound(page_id.to_string()))?;

    let mut orphans = 0;
    for page in pages.iter_mut().filter(|page| page.is_child_of(page_id)) {
      page.parent_id = None;
      orphans += 1;
    }
    pages.remove(index);
    debug!("deleted page, {} children moved to root", orphans);

    self.pages.save_all(&pages).await?;
    Ok(())
  }

  /// Re-parents the page, or makes it a root page when `new_parent_id` is
  /// `None`.
  pub async fn move_page(
    &self,
    page_id: &str,
    new_parent_id: Option<PageId>,
  ) -> Result<Page, FolderError> {
    self
      .update_page(page_id, PageUpdate::new().with_parent(new_parent_id))
      .await
  }

  /// Copies the page under a fresh id right after the source, titled
  /// `"<title> (Copy)"`. With `include_blocks` the copy points at the same
  /// block ids; blocks themselves are never copied.
  #[instrument(level = "debug", skip_all, fields(page_id = %page_id))]
  pub async fn duplicate_page(
    &self,
    page_id: &str,
    include_blocks: bool,
  ) -> Result<Page, FolderError> {
    let mut pages = self.pages.load_all().await?;
    let index = pages
      .iter()
      .position(|page| page.id == page_id)
      .ok_or_else(|| FolderError::PageNotFound(page_id.to_string()))?;

    let now = timestamp();
    let source = &pages[index];
    let duplicated = Page {
      id: generate_id(),
      title: format!("{} (Copy)", source.title),
      block_ids: if include_blocks {
        source.block_ids.clone()
      } else {
        vec![]
      },
      created_at: now,
      updated_at: now,
      ..source.clone()
    };
    pages.insert(index + 1, duplicated.clone());

    self.pages.save_all(&pages).await?;
    Ok(duplicated)
  }

  pub async fn set_favorite(&self, page_id: &str, is_favorite: bool) -> Result<Page, FolderError> {
    self
      .update_page(page_id, PageUpdate::new().with_favorite(is_favorite))
      .await
  }
}
