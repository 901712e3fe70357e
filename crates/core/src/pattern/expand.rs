//! Expansion of raw matches into full selections.

use rustc_hash::FxHashSet;

use crate::model::{BlockNode, LineKey, PageNode};

/// Expands raw matches to whole visual lines.
///
/// Collects the line keys touched by any raw match, then selects *every*
/// node whose line key is in that set, matched or not: one high-scoring cell
/// anywhere in a row pulls in the entire row, even siblings whose own
/// vectors would not clear the threshold. Propagation operates at row
/// granularity for tabular page content.
///
/// Returns node indices in node-list order.
pub fn expand_to_lines(
    nodes: &[PageNode],
    raw_matches: &[usize],
    line_tolerance: f64,
) -> Vec<usize> {
    let active_lines: FxHashSet<LineKey> = raw_matches
        .iter()
        .map(|&i| nodes[i].line_key(line_tolerance))
        .collect();

    nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| active_lines.contains(&n.line_key(line_tolerance)))
        .map(|(i, _)| i)
        .collect()
}

/// Selects every block whose horizontal offset differs from the seed's by
/// strictly less than `x_match_tolerance`. No scoring and no line concept;
/// alignment is the sole criterion for flowing documents.
pub fn aligned_blocks(nodes: &[BlockNode], seed_x: i64, x_match_tolerance: i64) -> Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| (n.x() - seed_x).abs() < x_match_tolerance)
        .map(|(i, _)| i)
        .collect()
}
