//! Structural node records for paginated and flowing documents.
//!
//! Nodes are owned records in an in-memory arena (a plain `Vec` per
//! session), addressed by id through an id-to-index map. Rendering layers
//! look geometry up by id; they do not define it.

use smol_str::{SmolStr, format_smolstr};

use super::line::LineKey;

/// Node identifier, unique within one document and stable across
/// re-extraction of the same document.
///
/// Paginated ids have the form `page-{page}-{index}`, flowing ids
/// `block-{index}`. Short enough to stay inline in a [`SmolStr`].
pub type NodeId = SmolStr;

/// Builds the id for the `index`-th raw item (0-based, counted over *all*
/// raw items of the page, skipped or not) on 1-based page `page`.
pub fn page_node_id(page: u32, index: usize) -> NodeId {
    format_smolstr!("page-{page}-{index}")
}

/// Builds the id for the `index`-th non-empty block in traversal order.
pub fn block_node_id(index: usize) -> NodeId {
    format_smolstr!("block-{index}")
}

/// A positioned text run on a page of a paginated document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageNode {
    id: NodeId,
    page: u32,
    x: f64,
    y: f64,
    font_size: f64,
    text: String,
}

impl PageNode {
    pub fn new(page: u32, index: usize, x: f64, y: f64, font_size: f64, text: String) -> Self {
        Self {
            id: page_node_id(page, index),
            page,
            x,
            y,
            font_size,
            text,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// 1-based page number.
    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Raw (unquantized) vertical position in document-space units.
    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The visual-line key: page plus vertical position quantized to
    /// `line_tolerance` buckets. All nodes with equal keys form one line
    /// regardless of horizontal position.
    pub fn line_key(&self, line_tolerance: f64) -> LineKey {
        LineKey::new(self.page, self.y, line_tolerance)
    }
}

/// A block element (paragraph, table cell, heading) of a flowing document.
///
/// Flowing documents carry no universal font-size axis, so the horizontal
/// offset of the block's box relative to the rendered container is the sole
/// structural signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    id: NodeId,
    x: i64,
    text: String,
}

impl BlockNode {
    pub fn new(index: usize, x: i64, text: String) -> Self {
        Self {
            id: block_node_id(index),
            x,
            text,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Rounded horizontal offset relative to the document container.
    pub const fn x(&self) -> i64 {
        self.x
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
