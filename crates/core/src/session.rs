//! The active-file session.
//!
//! A [`Session`] owns everything derived from one document: the node list,
//! the feature matrix (paginated only), and the selection state. Switching
//! files means building a new session and dropping the old one wholesale, so
//! at most one document's worth of data is retained and no state is ever
//! partially mutated across documents. All operations run synchronously to
//! completion; matching is O(N) over the active document's nodes.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::extract;
use crate::model::{BlockNode, DocumentKind, NodeId, PageNode, SheetGrid};
use crate::pattern::{self, FeatureMatrix, MatchParams};
use crate::provider::ProviderRegistry;
use crate::selection::Selection;

#[derive(Debug)]
enum DocumentNodes {
    Paginated {
        nodes: Vec<PageNode>,
        index: FxHashMap<NodeId, usize>,
        features: FeatureMatrix,
    },
    Flowing {
        nodes: Vec<BlockNode>,
        index: FxHashMap<NodeId, usize>,
    },
    Tabular {
        sheets: Vec<SheetGrid>,
    },
}

/// Selection engine bound to one extracted document.
#[derive(Debug)]
pub struct Session {
    params: MatchParams,
    document: DocumentNodes,
    selection: Selection,
}

impl Session {
    /// Opens a paginated document through the registered page provider,
    /// extracting nodes and encoding the feature matrix up front.
    pub fn paginated(registry: &ProviderRegistry, params: MatchParams) -> Result<Self> {
        let nodes = extract::extract_pages(registry.pages()?);
        let index = id_index(nodes.iter().map(PageNode::id));
        let features = FeatureMatrix::from_nodes(&nodes, &params);
        Ok(Self {
            params,
            document: DocumentNodes::Paginated {
                nodes,
                index,
                features,
            },
            selection: Selection::new(),
        })
    }

    /// Opens a flowing document through the registered block-tree provider.
    pub fn flowing(registry: &ProviderRegistry, params: MatchParams) -> Result<Self> {
        let nodes = extract::extract_blocks(registry.blocks()?)?;
        let index = id_index(nodes.iter().map(BlockNode::id));
        Ok(Self {
            params,
            document: DocumentNodes::Flowing { nodes, index },
            selection: Selection::new(),
        })
    }

    /// Opens a workbook through the registered sheet provider.
    pub fn tabular(registry: &ProviderRegistry, params: MatchParams) -> Result<Self> {
        let sheets = extract::extract_sheets(registry.sheets()?)?;
        Ok(Self {
            params,
            document: DocumentNodes::Tabular { sheets },
            selection: Selection::new(),
        })
    }

    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    pub fn document_kind(&self) -> DocumentKind {
        match self.document {
            DocumentNodes::Paginated { .. } => DocumentKind::Paginated,
            DocumentNodes::Flowing { .. } => DocumentKind::Flowing,
            DocumentNodes::Tabular { .. } => DocumentKind::Tabular,
        }
    }

    /// Number of structural nodes (zero for tabular documents, whose unit of
    /// selection is the column).
    pub fn node_count(&self) -> usize {
        match &self.document {
            DocumentNodes::Paginated { nodes, .. } => nodes.len(),
            DocumentNodes::Flowing { nodes, .. } => nodes.len(),
            DocumentNodes::Tabular { .. } => 0,
        }
    }

    pub fn page_nodes(&self) -> &[PageNode] {
        match &self.document {
            DocumentNodes::Paginated { nodes, .. } => nodes,
            _ => &[],
        }
    }

    pub fn block_nodes(&self) -> &[BlockNode] {
        match &self.document {
            DocumentNodes::Flowing { nodes, .. } => nodes,
            _ => &[],
        }
    }

    pub fn sheets(&self) -> &[SheetGrid] {
        match &self.document {
            DocumentNodes::Tabular { sheets } => sheets,
            _ => &[],
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Propagates a pattern from the seed node and unions the result into
    /// the selection. Returns how many ids are newly selected.
    ///
    /// A seed id not present in the node list (a stale reference from before
    /// a file switch) is a no-op returning 0, as is any seed on a tabular
    /// session or an empty document.
    pub fn select_by_seed(&mut self, seed_id: &str) -> usize {
        let (kind, ids): (DocumentKind, Vec<NodeId>) = match &self.document {
            DocumentNodes::Paginated {
                nodes,
                index,
                features,
            } => {
                let Some(&seed) = index.get(seed_id) else {
                    return 0;
                };
                let raw =
                    pattern::raw_matches(features, seed, self.params.similarity_threshold);
                let expanded =
                    pattern::expand_to_lines(nodes, &raw, self.params.line_tolerance);
                (
                    DocumentKind::Paginated,
                    expanded.into_iter().map(|i| nodes[i].id().clone()).collect(),
                )
            }
            DocumentNodes::Flowing { nodes, index } => {
                let Some(&seed) = index.get(seed_id) else {
                    return 0;
                };
                let aligned = pattern::aligned_blocks(
                    nodes,
                    nodes[seed].x(),
                    self.params.x_match_tolerance,
                );
                (
                    DocumentKind::Flowing,
                    aligned.into_iter().map(|i| nodes[i].id().clone()).collect(),
                )
            }
            DocumentNodes::Tabular { .. } => return 0,
        };

        self.selection.extend_nodes(kind, ids)
    }

    /// Adds the node to the exclusion overlay; it stays in the selection but
    /// is no longer reported as highlighted.
    pub fn exclude_node(&mut self, id: &str) {
        self.selection.exclude(NodeId::from(id));
    }

    /// Toggles one column of one sheet. Returns whether the column is
    /// selected after the toggle; out-of-range references and non-tabular
    /// sessions are no-ops returning `false`.
    pub fn toggle_column(&mut self, sheet: usize, column: usize) -> bool {
        let DocumentNodes::Tabular { sheets } = &self.document else {
            return false;
        };
        let in_range = sheets
            .get(sheet)
            .is_some_and(|s| column < s.column_count());
        if !in_range {
            return false;
        }
        self.selection.toggle_column(sheet, column)
    }

    /// Empties the selection and the exclusion overlay and unpins the
    /// selection kind.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

fn id_index<'a, I>(ids: I) -> FxHashMap<NodeId, usize>
where
    I: Iterator<Item = &'a NodeId>,
{
    ids.enumerate().map(|(i, id)| (id.clone(), i)).collect()
}
