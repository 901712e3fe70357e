//! Flowing-document node extraction.

use crate::error::Result;
use crate::model::BlockNode;
use crate::provider::BlockTreeProvider;

/// Extracts structural nodes from the block traversal of a flowing document.
///
/// Blocks with empty trimmed text are dropped and do *not* consume an id
/// index: ids count non-empty blocks only, in traversal order. Empty blocks
/// are never addressable, so numbering them would only perturb the ids of
/// the blocks that are.
///
/// The block offset is rounded to whole units; sub-unit differences between
/// identically-indented blocks come from rendering, not structure.
pub fn extract_blocks(provider: &dyn BlockTreeProvider) -> Result<Vec<BlockNode>> {
    let blocks = provider.blocks()?;

    Ok(blocks
        .into_iter()
        .filter(|b| !b.text.trim().is_empty())
        .enumerate()
        .map(|(index, b)| BlockNode::new(index, b.left.round() as i64, b.text))
        .collect())
}
