use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use notebook_entity::define::{BlockId, generate_block_id};
use notebook_entity::{Block, BlockUpdate};
use notebook_persistence::{NotebookStore, RecordStore};
use tracing::{debug, instrument, warn};

use crate::DocumentError;

/// Owns the block collection. Blocks do not know their page, so nothing here
/// touches page `block_ids`; deleting a block may leave dangling references
/// behind and readers have to tolerate them.
#[derive(Clone)]
pub struct BlockCollection {
  blocks: Arc<dyn RecordStore<Block>>,
}

impl BlockCollection {
  pub fn new(store: &NotebookStore) -> Self {
    Self::from_store(store.blocks.clone())
  }

  pub fn from_store(blocks: Arc<dyn RecordStore<Block>>) -> Self {
    Self { blocks }
  }

  pub async fn get_blocks(&self) -> Result<Vec<Block>, DocumentError> {
    Ok(self.blocks.load_all().await?)
  }

  pub async fn get_block(&self, block_id: &str) -> Result<Block, DocumentError> {
    self
      .blocks
      .get(block_id)
      .await?
      .ok_or_else(|| DocumentError::BlockIsNotFound(block_id.to_string()))
  }

  #[instrument(level = "debug", skip_all, fields(block_id = %block.id))]
  pub async fn create_block(&self, block: Block) -> Result<Block, DocumentError> {
    let mut blocks = self.blocks.load_all().await?;
    if blocks.iter().any(|b| b.id == block.id) {
      return Err(DocumentError::BlockAlreadyExists(block.id));
    }
    blocks.push(block.clone());
    self.blocks.save_all(&blocks).await?;
    Ok(block)
  }

  #[instrument(level = "debug", skip_all, fields(block_id = %block_id))]
  pub async fn update_block(
    &self,
    block_id: &str,
    update: BlockUpdate,
  ) -> Result<Block, DocumentError> {
    let mut blocks = self.blocks.load_all().await?;
    let block = blocks
      .iter_mut()
      .find(|b| b.id == block_id)
      .ok_or_else(|| DocumentError::BlockIsNotFound(block_id.to_string()))?;
    update.apply_to(&mut block.kind);
    let block = block.clone();

    self.blocks.save_all(&blocks).await?;
    Ok(block)
  }

  #[instrument(level = "debug", skip_all, fields(block_id = %block_id))]
  pub async fn delete_block(&self, block_id: &str) -> Result<(), DocumentError> {
    let mut blocks = self.blocks.load_all().await?;
    let index = blocks
      .iter()
      .position(|b| b.id == block_id)
      .ok_or_else(|| DocumentError::BlockIsNotFound(block_id.to_string()))?;
    blocks.remove(index);
    self.blocks.save_all(&blocks).await?;
    Ok(())
  }

  /// Copies the block under a fresh id and stores the copy right after the
  /// source. The copy is not added to any page.
  #[instrument(level = "debug", skip_all, fields(block_id = %block_id))]
  pub async fn duplicate_block(&self, block_id: &str) -> Result<Block, DocumentError> {
    let mut blocks = self.blocks.load_all().await?;
    let index = blocks
      .iter()
      .position(|b| b.id == block_id)
      .ok_or_else(|| DocumentError::BlockIsNotFound(block_id.to_string()))?;

    let duplicated = Block::new(generate_block_id(), blocks[index].kind.clone());
    blocks.insert(index + 1, duplicated.clone());
    self.blocks.save_all(&blocks).await?;
    Ok(duplicated)
  }

  /// Rewrites the stored order of the whole collection.
  ///
  /// `block_ids` must name every stored block exactly once. Anything else is
  /// rejected and the stored order stays as it was.
  #[instrument(level = "debug", skip_all)]
  pub async fn reorder_blocks(
    &self,
    block_ids: Vec<BlockId>,
  ) -> Result<Vec<Block>, DocumentError> {
    let blocks = self.blocks.load_all().await?;
    validate_permutation(&blocks, &block_ids).inspect_err(|err| warn!("{}", err))?;

    let mut by_id: HashMap<BlockId, Block> = blocks
      .into_iter()
      .map(|block| (block.id.clone(), block))
      .collect();
    let reordered = block_ids
      .iter()
      .filter_map(|id| by_id.remove(id))
      .collect::<Vec<_>>();

    debug!("reordered {} blocks", reordered.len());
    self.blocks.save_all(&reordered).await?;
    Ok(reordered)
  }
}

fn validate_permutation(blocks: &[Block], block_ids: &[BlockId]) -> Result<(), DocumentError> {
  let mut seen = HashSet::with_capacity(block_ids.len());
  for id in block_ids {
    if !seen.insert(id.as_str()) {
      return Err(DocumentError::InvalidReorder(format!("duplicate id {}", id)));
    }
  }

  let existing = blocks.iter().map(|b| b.id.as_str()).collect::<HashSet<_>>();
  if let Some(unknown) = seen.iter().find(|id| !existing.contains(*id)) {
    return Err(DocumentError::InvalidReorder(format!("unknown id {}", unknown)));
  }
  if seen.len() != existing.len() {
    return Err(DocumentError::InvalidReorder(format!(
      "expected {} ids, got {}",
      existing.len(),
      seen.len()
    )));
  }
  Ok(())
}
