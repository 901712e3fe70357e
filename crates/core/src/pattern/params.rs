//! Pattern-matching parameters.
//!
//! Contains MatchParams struct for controlling feature encoding, similarity
//! thresholding, and selection expansion.

/// Parameters for pattern propagation.
///
/// The similarity threshold and the normalization constants are one coupled
/// tunable unit: scores are raw (non-unit-normalized) dot products, so
/// changing a norm rescales every score the threshold is compared against.
/// They are configuration, not constants, so the same values used in
/// production can be validated in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchParams {
    /// Vertical bucket size, in document-space units, used to group
    /// paginated nodes into visual lines.
    pub line_tolerance: f64,

    /// Divisor applied to a node's horizontal position in its feature vector.
    pub x_norm: f64,

    /// Divisor applied to a node's font size in its feature vector.
    pub font_norm: f64,

    /// Divisor applied to a node's text length in its feature vector; the
    /// scaled length is capped at 1.
    pub len_norm: f64,

    /// A node is a raw match iff its dot product with the seed's feature
    /// vector is strictly greater than this.
    pub similarity_threshold: f64,

    /// Maximum horizontal-offset difference, exclusive, for two flowing
    /// blocks to count as aligned.
    pub x_match_tolerance: i64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            line_tolerance: 3.0,
            x_norm: 1000.0,
            font_norm: 100.0,
            len_norm: 500.0,
            similarity_threshold: 0.985,
            x_match_tolerance: 15,
        }
    }
}

impl MatchParams {
    /// Creates new pattern-matching parameters with the specified values.
    ///
    /// # Panics
    /// Panics if any norm or tolerance is not strictly positive.
    pub fn new(
        line_tolerance: f64,
        x_norm: f64,
        font_norm: f64,
        len_norm: f64,
        similarity_threshold: f64,
        x_match_tolerance: i64,
    ) -> Self {
        assert!(line_tolerance > 0.0, "line_tolerance must be positive");
        assert!(
            x_norm > 0.0 && font_norm > 0.0 && len_norm > 0.0,
            "normalization constants must be positive"
        );
        assert!(x_match_tolerance > 0, "x_match_tolerance must be positive");

        Self {
            line_tolerance,
            x_norm,
            font_norm,
            len_norm,
            similarity_threshold,
            x_match_tolerance,
        }
    }
}
