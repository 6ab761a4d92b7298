use crate::blocks::{Block, BlockType};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockPatch {
    pub block_type: Option<BlockType>,
    pub content: Option<String>,
}

impl BlockPatch {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            block_type: None,
            content: Some(text.into()),
        }
    }

    pub fn block_type(block_type: BlockType) -> Self {
        Self {
            block_type: Some(block_type),
            content: None,
        }
    }
}

/// Ordered block sequence. Never empty: construction and `delete` both
/// enforce the one-block floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Block>", into = "Vec<Block>")]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::empty_paragraph()],
        }
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let mut document = Self { blocks };
        document.ensure_non_empty();
        document
    }

    fn ensure_non_empty(&mut self) {
        if self.blocks.is_empty() {
            self.blocks.push(Block::empty_paragraph());
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    pub fn predecessor_id(&self, id: &str) -> Option<&str> {
        let ix = self.index_of(id)?;
        if ix == 0 {
            return None;
        }
        Some(&self.blocks[ix - 1].id)
    }

    /// Inserts a fresh empty block immediately after `after_id` and returns
    /// its id. An unknown `after_id` appends at the end.
    pub fn insert_after(&mut self, after_id: &str, block_type: BlockType) -> String {
        let insert_ix = match self.index_of(after_id) {
            Some(ix) => ix + 1,
            None => self.blocks.len(),
        };
        let block = Block::new(block_type);
        let id = block.id.clone();
        debug!(id = %id, ix = insert_ix, "insert block");
        self.blocks.insert(insert_ix, block);
        id
    }

    /// Merges `patch` into the block matching `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, patch: BlockPatch) {
        let Some(ix) = self.index_of(id) else {
            return;
        };
        let block = &mut self.blocks[ix];
        if let Some(block_type) = patch.block_type {
            block.block_type = block_type;
        }
        if let Some(content) = patch.content {
            block.content = content;
        }
    }

    /// Removes the block matching `id` unless it is the sole remaining block.
    /// Returns whether a block was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.blocks.len() <= 1 {
            return false;
        }
        let Some(ix) = self.index_of(id) else {
            return false;
        };
        debug!(id = %id, ix, "delete block");
        self.blocks.remove(ix);
        true
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}

impl From<Document> for Vec<Block> {
    fn from(document: Document) -> Self {
        document.blocks
    }
}
