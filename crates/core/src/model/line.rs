//! Visual-line keys for paginated documents.

/// Identifies one visual line: a page number plus the vertical position
/// quantized to `line_tolerance`-sized buckets.
///
/// Quantization (`bucket = round(y / tolerance)`) is what groups
/// visually-aligned text runs into one line despite sub-pixel differences
/// from font metrics. Two runs whose raw `y` straddle a bucket boundary do
/// not merge; that is an accepted false negative, and no transitive or
/// adaptive clustering is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey {
    page: u32,
    bucket: i64,
}

impl LineKey {
    /// Quantizes raw `y` into a line key on the given page.
    pub fn new(page: u32, y: f64, line_tolerance: f64) -> Self {
        Self {
            page,
            bucket: (y / line_tolerance).round() as i64,
        }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The quantized vertical position in document-space units, i.e.
    /// `round(y / tolerance) * tolerance`.
    pub fn quantized_y(&self, line_tolerance: f64) -> f64 {
        self.bucket as f64 * line_tolerance
    }
}
