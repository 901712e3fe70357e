//! Spreadsheet grids.

/// One sheet of a workbook as a row-major cell grid.
///
/// Rows may be ragged; a missing cell reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetGrid {
    name: String,
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn new(name: String, rows: Vec<Vec<String>>) -> Self {
        Self { name, rows }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell text at `(row, column)`, empty string for cells a ragged row
    /// does not carry.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }
}
