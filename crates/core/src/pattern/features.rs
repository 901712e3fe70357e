//! Per-node feature encoding.
//!
//! Each paginated node maps to a fixed 4-dimensional vector:
//! horizontal position and font size capture "sits in the same column/role",
//! the leading-digit flag separates numeric cells from label text, and the
//! capped length separates short labels from long paragraphs. Together they
//! form a coarse fingerprint of a table-row role with no semantic parsing.
//!
//! Encoding applies only the fixed scaling from [`MatchParams`]: no
//! mean/variance normalization and no L2 normalization. Matches are expected
//! to be near-identical structural rows, not fuzzy semantic matches.

use crate::model::PageNode;

use super::params::MatchParams;

/// Dimensionality of the per-node feature vector.
pub const FEATURE_DIM: usize = 4;

/// Encodes one node. Pure and order-independent: the vector depends on this
/// node alone, never on corpus-wide statistics.
pub fn encode(node: &PageNode, params: &MatchParams) -> [f64; FEATURE_DIM] {
    let starts_with_digit = node
        .text()
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    let len = node.text().chars().count() as f64;

    [
        node.x() / params.x_norm,
        node.font_size() / params.font_norm,
        if starts_with_digit { 1.0 } else { 0.0 },
        (len / params.len_norm).min(1.0),
    ]
}

/// The N x 4 feature matrix of one paginated document, row `i` encoding the
/// `i`-th node of the session's node list.
///
/// Exactly one matrix exists per session; it is replaced wholesale together
/// with the node list on file switch.
#[derive(Debug, Clone, Default)]
pub struct FeatureMatrix {
    rows: Vec<[f64; FEATURE_DIM]>,
}

impl FeatureMatrix {
    /// Encodes every node, preserving node-list order.
    pub fn from_nodes(nodes: &[PageNode], params: &MatchParams) -> Self {
        Self {
            rows: nodes.iter().map(|n| encode(n, params)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> &[f64; FEATURE_DIM] {
        &self.rows[index]
    }

    pub(crate) fn rows(&self) -> &[[f64; FEATURE_DIM]] {
        &self.rows
    }
}
