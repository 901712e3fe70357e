//! Data model for structural nodes.
//!
//! A *structural node* is one addressable, positioned text unit derived from
//! a document: a text run on a page, a paragraph/cell block in a flowing
//! document, or a spreadsheet column grid.

pub mod line;
pub mod node;
pub mod sheet;

pub use line::LineKey;
pub use node::{BlockNode, NodeId, PageNode, block_node_id, page_node_id};
pub use sheet::SheetGrid;

/// The three document representations the engine understands.
///
/// Selections never span document kinds; a session is bound to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Fixed pages of positioned text runs (PDF-like).
    Paginated,
    /// A flowing block tree (Word-like); blocks compared by x alignment only.
    Flowing,
    /// Per-sheet cell grids with discrete columns.
    Tabular,
}

impl DocumentKind {
    /// Stable lowercase name, used in diagnostics and CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paginated => "paginated",
            Self::Flowing => "flowing",
            Self::Tabular => "tabular",
        }
    }
}
