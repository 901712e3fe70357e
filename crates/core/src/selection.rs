//! Selection state.
//!
//! Holds the current selection kind, the selected node ids (or per-sheet
//! column indices), and the manually excluded-node overlay. The overlay is a
//! pure display filter: an excluded id keeps its membership in the
//! underlying match set and is only reported as not highlighted.
//!
//! Lifecycle: `EMPTY -> (seed) -> PARTIAL -> (more seeds) -> PARTIAL ->
//! (clear) -> EMPTY`. The kind is set by the first propagation or column
//! toggle and stays sticky until an explicit clear; a file switch rebuilds
//! the whole session, selection included.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use crate::model::{DocumentKind, NodeId};

/// Current selection for the active document, grown additively by pattern
/// propagation or column toggling and never persisted beyond the session.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    kind: Option<DocumentKind>,
    node_ids: IndexSet<NodeId>,
    columns: FxHashMap<usize, IndexSet<usize>>,
    excluded: IndexSet<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document kind the selection applies to, `None` while empty.
    pub fn kind(&self) -> Option<DocumentKind> {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty() && self.columns.values().all(IndexSet::is_empty)
    }

    /// Unions propagated ids into the selection, pinning the kind on first
    /// use. Returns how many ids are newly selected.
    pub fn extend_nodes<I>(&mut self, kind: DocumentKind, ids: I) -> usize
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.kind.get_or_insert(kind);
        ids.into_iter().filter(|id| self.node_ids.insert(id.clone())).count()
    }

    /// Adds or removes one column index for a sheet. Toggling twice restores
    /// the original state. Returns whether the column is selected afterwards.
    pub fn toggle_column(&mut self, sheet: usize, column: usize) -> bool {
        self.kind.get_or_insert(DocumentKind::Tabular);
        let columns = self.columns.entry(sheet).or_default();
        if columns.shift_remove(&column) {
            false
        } else {
            columns.insert(column);
            true
        }
    }

    /// Appends a node id to the exclusion overlay. Membership in the
    /// selection is untouched; only highlighting queries see the veto.
    pub fn exclude(&mut self, id: NodeId) {
        self.excluded.insert(id);
    }

    /// Resets to the empty state: ids, columns, kind, and the exclusion
    /// overlay.
    pub fn clear(&mut self) {
        self.kind = None;
        self.node_ids.clear();
        self.columns.clear();
        self.excluded.clear();
    }

    /// Selection membership, ignoring the exclusion overlay.
    pub fn contains(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn is_excluded(&self, id: &str) -> bool {
        self.excluded.contains(id)
    }

    /// Whether a renderer should highlight the node: selected and not
    /// vetoed.
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.contains(id) && !self.is_excluded(id)
    }

    pub fn is_column_selected(&self, sheet: usize, column: usize) -> bool {
        self.columns.get(&sheet).is_some_and(|c| c.contains(&column))
    }

    /// Count of highlighted nodes, or of selected columns across all sheets
    /// for tabular selections.
    pub fn highlighted_count(&self) -> usize {
        if self.kind == Some(DocumentKind::Tabular) {
            self.columns.values().map(IndexSet::len).sum()
        } else {
            self.node_ids
                .iter()
                .filter(|id| !self.excluded.contains(id.as_str()))
                .count()
        }
    }

    /// Selected ids in insertion order, exclusion overlay ignored.
    pub fn selected_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.node_ids.iter()
    }

    pub fn excluded_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.excluded.iter()
    }

    /// Per-sheet selected column sets, in toggle order within a sheet.
    pub fn selected_columns(&self) -> impl Iterator<Item = (usize, &IndexSet<usize>)> {
        self.columns
            .iter()
            .filter(|(_, c)| !c.is_empty())
            .map(|(&sheet, c)| (sheet, c))
    }
}
