//! Workbook extraction.

use crate::error::Result;
use crate::model::SheetGrid;
use crate::provider::SheetProvider;

/// Extracts the per-sheet cell grids of a workbook.
///
/// Columns are already discrete, so there is nothing to quantize or encode;
/// grids pass through as-is, ragged rows included.
pub fn extract_sheets(provider: &dyn SheetProvider) -> Result<Vec<SheetGrid>> {
    let sheets = provider.sheets()?;

    Ok(sheets
        .into_iter()
        .map(|s| SheetGrid::new(s.name, s.rows))
        .collect())
}
