//! Upstream provider contracts.
//!
//! Container parsing and rendering are external collaborators: a page
//! renderer hands over positioned text runs, a block-tree renderer hands
//! over laid-out blocks, a workbook parser hands over cell grids. The core
//! consumes them through the traits below and never parses a container
//! format itself.
//!
//! Readiness is explicit: providers live in a [`ProviderRegistry`] passed in
//! at session construction, and asking for an unregistered provider yields
//! [`SelectError::ProviderUnavailable`] instead of consulting ambient
//! library-loaded flags.

use crate::error::{Result, SelectError};

/// One positioned text run, as produced by a page renderer.
///
/// The coordinate convention (top-down or bottom-up) is the provider's; the
/// extractor only requires it to be consistent across the document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One block element of a rendered flowing document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    /// Trimmed inner text of the block.
    pub text: String,
    /// Left edge of the block's box relative to the rendered container.
    pub left: f64,
}

/// One sheet of a parsed workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    /// Row-major cells; rows may be ragged.
    pub rows: Vec<Vec<String>>,
}

/// Supplies positioned text runs for the pages of a paginated document.
pub trait PageGeometryProvider {
    fn page_count(&self) -> usize;

    /// Items of the given 1-based page, in document order.
    fn page_items(&self, page_number: u32) -> Result<Vec<RawTextItem>>;
}

/// Supplies the block traversal of a rendered flowing document.
pub trait BlockTreeProvider {
    /// Blocks in traversal order over the rendered document.
    fn blocks(&self) -> Result<Vec<RawBlock>>;
}

/// Supplies per-sheet cell grids of a parsed workbook.
pub trait SheetProvider {
    fn sheets(&self) -> Result<Vec<RawSheet>>;
}

/// Registry of the external collaborators a session may draw on.
///
/// At most one provider per document kind; a kind whose provider was never
/// registered is reported as unavailable, a recoverable condition the caller
/// may retry (the core itself does not).
#[derive(Default)]
pub struct ProviderRegistry {
    pages: Option<Box<dyn PageGeometryProvider>>,
    blocks: Option<Box<dyn BlockTreeProvider>>,
    sheets: Option<Box<dyn SheetProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pages(&mut self, provider: Box<dyn PageGeometryProvider>) {
        self.pages = Some(provider);
    }

    pub fn register_blocks(&mut self, provider: Box<dyn BlockTreeProvider>) {
        self.blocks = Some(provider);
    }

    pub fn register_sheets(&mut self, provider: Box<dyn SheetProvider>) {
        self.sheets = Some(provider);
    }

    pub fn pages(&self) -> Result<&dyn PageGeometryProvider> {
        self.pages
            .as_deref()
            .ok_or(SelectError::ProviderUnavailable { kind: "page" })
    }

    pub fn blocks(&self) -> Result<&dyn BlockTreeProvider> {
        self.blocks
            .as_deref()
            .ok_or(SelectError::ProviderUnavailable { kind: "block-tree" })
    }

    pub fn sheets(&self) -> Result<&dyn SheetProvider> {
        self.sheets
            .as_deref()
            .ok_or(SelectError::ProviderUnavailable { kind: "sheet" })
    }
}

/// In-memory page provider backed by pre-extracted items, one `Vec` per page.
#[derive(Debug, Clone, Default)]
pub struct StaticPageProvider {
    pages: Vec<Vec<RawTextItem>>,
}

impl StaticPageProvider {
    pub fn new(pages: Vec<Vec<RawTextItem>>) -> Self {
        Self { pages }
    }
}

impl PageGeometryProvider for StaticPageProvider {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_items(&self, page_number: u32) -> Result<Vec<RawTextItem>> {
        (page_number as usize)
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or_else(|| SelectError::Provider(format!("no such page: {page_number}")))
    }
}

/// In-memory block-tree provider backed by a pre-traversed block list.
#[derive(Debug, Clone, Default)]
pub struct StaticBlockProvider {
    blocks: Vec<RawBlock>,
}

impl StaticBlockProvider {
    pub fn new(blocks: Vec<RawBlock>) -> Self {
        Self { blocks }
    }
}

impl BlockTreeProvider for StaticBlockProvider {
    fn blocks(&self) -> Result<Vec<RawBlock>> {
        Ok(self.blocks.clone())
    }
}

/// In-memory sheet provider backed by parsed grids.
#[derive(Debug, Clone, Default)]
pub struct StaticSheetProvider {
    sheets: Vec<RawSheet>,
}

impl StaticSheetProvider {
    pub fn new(sheets: Vec<RawSheet>) -> Self {
        Self { sheets }
    }
}

impl SheetProvider for StaticSheetProvider {
    fn sheets(&self) -> Result<Vec<RawSheet>> {
        Ok(self.sheets.clone())
    }
}
