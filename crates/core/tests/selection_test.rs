//! Tests for the Selection state machine: sticky kind, additive growth,
//! column toggling, and the exclusion overlay.

use structsel_core::model::{DocumentKind, NodeId};
use structsel_core::selection::Selection;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

// ============================================================================
// Node selections
// ============================================================================

#[test]
fn extend_counts_only_new_ids() {
    let mut sel = Selection::new();
    let added = sel.extend_nodes(DocumentKind::Paginated, vec![id("a"), id("b")]);
    assert_eq!(added, 2);

    let added = sel.extend_nodes(DocumentKind::Paginated, vec![id("b"), id("c")]);
    assert_eq!(added, 1);
    assert!(sel.contains("a"));
    assert!(sel.contains("c"));
}

#[test]
fn kind_is_set_on_first_propagation_and_sticky() {
    let mut sel = Selection::new();
    assert_eq!(sel.kind(), None);

    sel.extend_nodes(DocumentKind::Flowing, vec![id("block-0")]);
    assert_eq!(sel.kind(), Some(DocumentKind::Flowing));

    sel.extend_nodes(DocumentKind::Flowing, vec![id("block-5")]);
    assert_eq!(sel.kind(), Some(DocumentKind::Flowing));
}

#[test]
fn clear_returns_to_empty() {
    let mut sel = Selection::new();
    sel.extend_nodes(DocumentKind::Paginated, vec![id("a")]);
    sel.exclude(id("a"));
    assert!(!sel.is_empty());

    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.kind(), None);
    assert!(!sel.contains("a"));
    assert!(!sel.is_excluded("a"));
}

#[test]
fn selected_ids_iterate_in_insertion_order() {
    let mut sel = Selection::new();
    sel.extend_nodes(DocumentKind::Paginated, vec![id("c"), id("a")]);
    sel.extend_nodes(DocumentKind::Paginated, vec![id("b"), id("a")]);
    let order: Vec<&str> = sel.selected_ids().map(NodeId::as_str).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}

// ============================================================================
// Exclusion overlay
// ============================================================================

#[test]
fn exclusion_hides_without_removing_membership() {
    let mut sel = Selection::new();
    sel.extend_nodes(DocumentKind::Paginated, vec![id("a"), id("b")]);

    sel.exclude(id("a"));
    assert!(sel.contains("a"), "membership must survive exclusion");
    assert!(!sel.is_highlighted("a"));
    assert!(sel.is_highlighted("b"));
    assert_eq!(sel.highlighted_count(), 1);
}

#[test]
fn re_extending_an_excluded_id_adds_nothing() {
    let mut sel = Selection::new();
    sel.extend_nodes(DocumentKind::Paginated, vec![id("a")]);
    sel.exclude(id("a"));

    // The id is still a member, so propagating over it again is a no-op and
    // the veto stays in force.
    let added = sel.extend_nodes(DocumentKind::Paginated, vec![id("a")]);
    assert_eq!(added, 0);
    assert!(!sel.is_highlighted("a"));
}

// ============================================================================
// Column toggling
// ============================================================================

#[test]
fn toggle_twice_restores_original_state() {
    let mut sel = Selection::new();
    assert!(sel.toggle_column(0, 2));
    assert!(sel.is_column_selected(0, 2));

    assert!(!sel.toggle_column(0, 2));
    assert!(!sel.is_column_selected(0, 2));
    assert!(sel.is_empty());
}

#[test]
fn column_selections_are_per_sheet() {
    let mut sel = Selection::new();
    sel.toggle_column(0, 1);
    sel.toggle_column(2, 1);
    sel.toggle_column(2, 4);

    assert!(sel.is_column_selected(0, 1));
    assert!(!sel.is_column_selected(1, 1));
    assert!(sel.is_column_selected(2, 4));
    assert_eq!(sel.highlighted_count(), 3);
    assert_eq!(sel.kind(), Some(DocumentKind::Tabular));
}
