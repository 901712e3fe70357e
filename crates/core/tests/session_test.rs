//! Session lifecycle tests: provider wiring, seed propagation across the
//! three document kinds, determinism, additivity, and error policy.

use structsel_core::model::DocumentKind;
use structsel_core::provider::{
    ProviderRegistry, RawBlock, RawSheet, RawTextItem, StaticBlockProvider, StaticPageProvider,
    StaticSheetProvider,
};
use structsel_core::{MatchParams, SelectError, Session};

fn item(text: &str, x: f64, y: f64) -> RawTextItem {
    RawTextItem {
        text: text.to_string(),
        x,
        y,
        width: 40.0,
        height: 12.0,
    }
}

fn block(text: &str, left: f64) -> RawBlock {
    RawBlock {
        text: text.to_string(),
        left,
    }
}

fn paginated_session(pages: Vec<Vec<RawTextItem>>) -> Session {
    let mut registry = ProviderRegistry::new();
    registry.register_pages(Box::new(StaticPageProvider::new(pages)));
    Session::paginated(&registry, MatchParams::default()).unwrap()
}

fn flowing_session(blocks: Vec<RawBlock>) -> Session {
    let mut registry = ProviderRegistry::new();
    registry.register_blocks(Box::new(StaticBlockProvider::new(blocks)));
    Session::flowing(&registry, MatchParams::default()).unwrap()
}

fn tabular_session(sheets: Vec<RawSheet>) -> Session {
    let mut registry = ProviderRegistry::new();
    registry.register_sheets(Box::new(StaticSheetProvider::new(sheets)));
    Session::tabular(&registry, MatchParams::default()).unwrap()
}

/// Three lines of three nodes each: label rows above and below a row of
/// numeric cells. Within each line the feature vectors are identical,
/// across lines they differ.
fn three_by_three() -> Vec<Vec<RawTextItem>> {
    vec![vec![
        item("aaa", 100.0, 50.0),
        item("bbb", 100.0, 50.0),
        item("ccc", 100.0, 50.0),
        item("1", 100.0, 100.0),
        item("2", 100.0, 100.0),
        item("3", 100.0, 100.0),
        item("dddd", 140.0, 150.0),
        item("eeee", 140.0, 150.0),
        item("ffff", 140.0, 150.0),
    ]]
}

// ============================================================================
// Paginated propagation
// ============================================================================

#[test]
fn seed_in_middle_line_selects_exactly_that_line() {
    let mut session = paginated_session(three_by_three());
    let added = session.select_by_seed("page-1-4");
    assert_eq!(added, 3);

    let selected: Vec<&str> = session
        .selection()
        .selected_ids()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(selected, vec!["page-1-3", "page-1-4", "page-1-5"]);
}

#[test]
fn one_matching_cell_pulls_in_weak_siblings_on_its_line() {
    // The sibling's own vector (long non-numeric text) scores nowhere near
    // the threshold against the seed, but it shares the seed's visual line.
    let mut session = paginated_session(vec![vec![
        item("1. Item", 50.0, 120.0),
        item("Description text for the first item", 300.0, 121.4),
        item("Unrelated footer", 50.0, 400.0),
    ]]);
    session.select_by_seed("page-1-0");

    assert!(session.selection().is_highlighted("page-1-0"));
    assert!(session.selection().is_highlighted("page-1-1"));
    assert!(!session.selection().contains("page-1-2"));
}

#[test]
fn numeric_cells_propagate_across_rows() {
    // Two table rows with leading-digit cells: seeding either row captures
    // both, row-granularity expansion included.
    let mut session = paginated_session(vec![vec![
        item("1", 100.0, 100.0),
        item("Widget", 300.0, 100.0),
        item("2", 100.0, 130.0),
        item("Gadget", 300.0, 130.0),
        item("Notes", 100.0, 200.0),
    ]]);
    session.select_by_seed("page-1-0");

    assert_eq!(session.selection().highlighted_count(), 4);
    assert!(!session.selection().contains("page-1-4"));
}

#[test]
fn select_by_seed_is_deterministic() {
    let mut session = paginated_session(three_by_three());
    session.select_by_seed("page-1-4");
    let first: Vec<String> = session
        .selection()
        .selected_ids()
        .map(ToString::to_string)
        .collect();

    let added = session.select_by_seed("page-1-4");
    let second: Vec<String> = session
        .selection()
        .selected_ids()
        .map(ToString::to_string)
        .collect();

    assert_eq!(added, 0);
    assert_eq!(first, second);
}

#[test]
fn second_seed_never_removes_earlier_matches() {
    let mut session = paginated_session(vec![vec![
        item("1", 100.0, 100.0),
        // Far-right long label: clears its own squared-norm threshold but is
        // dissimilar to the numeric seed.
        item("Grand total of all line items carried forward", 995.0, 300.0),
        item("untouched", 400.0, 500.0),
    ]]);

    session.select_by_seed("page-1-0");
    let before: Vec<String> = session
        .selection()
        .selected_ids()
        .map(ToString::to_string)
        .collect();
    assert!(!before.is_empty());

    session.select_by_seed("page-1-1");
    for id in &before {
        assert!(session.selection().contains(id), "{id} lost after second seed");
    }
    assert!(session.selection().contains("page-1-1"));
}

#[test]
fn stale_seed_id_is_a_noop() {
    let mut session = paginated_session(three_by_three());
    assert_eq!(session.select_by_seed("page-7-0"), 0);
    assert!(session.selection().is_empty());
    assert_eq!(session.selection().kind(), None);
}

#[test]
fn empty_document_is_a_valid_terminal_state() {
    let mut session = paginated_session(vec![vec![item("   ", 0.0, 0.0)], vec![]]);
    assert_eq!(session.node_count(), 0);
    assert_eq!(session.select_by_seed("page-1-0"), 0);
    assert!(session.selection().is_empty());
}

#[test]
fn weak_seed_below_its_own_threshold_selects_nothing() {
    // Known weakness of the raw dot product: a small-magnitude vector's
    // squared norm stays under the threshold, so the seed produces no raw
    // matches, not even itself.
    let mut session = paginated_session(vec![vec![
        item("Name", 100.0, 100.0),
        item("Age", 300.0, 100.0),
    ]]);
    assert_eq!(session.select_by_seed("page-1-0"), 0);
    assert!(session.selection().is_empty());
}

// ============================================================================
// Flowing propagation
// ============================================================================

#[test]
fn alignment_tolerance_boundary() {
    let mut session = flowing_session(vec![
        block("seed paragraph", 100.0),
        block("fourteen right", 114.0),
        block("fifteen right", 115.0),
        block("sixteen right", 116.0),
        block("fourteen left", 86.0),
    ]);
    session.select_by_seed("block-0");

    assert!(session.selection().is_highlighted("block-0"));
    assert!(session.selection().is_highlighted("block-1"));
    assert!(!session.selection().contains("block-2"));
    assert!(!session.selection().contains("block-3"));
    assert!(session.selection().is_highlighted("block-4"));
}

#[test]
fn flowing_seeds_union_across_alignment_groups() {
    let mut session = flowing_session(vec![
        block("heading one", 40.0),
        block("indented cell", 200.0),
        block("heading two", 42.0),
        block("indented cell two", 203.0),
    ]);

    session.select_by_seed("block-0");
    assert_eq!(session.selection().highlighted_count(), 2);

    session.select_by_seed("block-1");
    assert_eq!(session.selection().highlighted_count(), 4);
    assert_eq!(session.selection().kind(), Some(DocumentKind::Flowing));
}

// ============================================================================
// Tabular sessions
// ============================================================================

fn workbook() -> Vec<RawSheet> {
    vec![
        RawSheet {
            name: "Items".into(),
            rows: vec![
                vec!["Id".into(), "Name".into(), "Price".into()],
                vec!["1".into(), "Widget".into()],
            ],
        },
        RawSheet {
            name: "Summary".into(),
            rows: vec![vec!["Total".into()]],
        },
    ]
}

#[test]
fn toggle_column_is_idempotent_through_the_session() {
    let mut session = tabular_session(workbook());
    assert!(session.toggle_column(0, 2));
    assert!(session.selection().is_column_selected(0, 2));

    assert!(!session.toggle_column(0, 2));
    assert!(!session.selection().is_column_selected(0, 2));
    assert!(session.selection().is_empty());
}

#[test]
fn out_of_range_toggles_are_noops() {
    let mut session = tabular_session(workbook());
    assert!(!session.toggle_column(5, 0));
    assert!(!session.toggle_column(1, 3));
    assert!(session.selection().is_empty());
}

#[test]
fn seeds_are_ignored_on_tabular_sessions() {
    let mut session = tabular_session(workbook());
    assert_eq!(session.select_by_seed("page-1-0"), 0);
    assert!(session.selection().is_empty());
}

#[test]
fn column_toggles_are_rejected_off_tabular_sessions() {
    let mut session = paginated_session(three_by_three());
    assert!(!session.toggle_column(0, 0));
    assert!(session.selection().is_empty());
}

// ============================================================================
// Exclusions and clearing
// ============================================================================

#[test]
fn excluded_node_stays_selected_but_unhighlighted() {
    let mut session = paginated_session(three_by_three());
    session.select_by_seed("page-1-4");

    session.exclude_node("page-1-5");
    assert!(session.selection().contains("page-1-5"));
    assert!(!session.selection().is_highlighted("page-1-5"));
    assert_eq!(session.selection().highlighted_count(), 2);
}

#[test]
fn clear_resets_selection_and_overlay() {
    let mut session = paginated_session(three_by_three());
    session.select_by_seed("page-1-4");
    session.exclude_node("page-1-5");

    session.clear_selection();
    assert!(session.selection().is_empty());
    assert_eq!(session.selection().kind(), None);
    assert!(!session.selection().is_excluded("page-1-5"));

    // The document itself is untouched; a fresh seed works immediately.
    assert_eq!(session.select_by_seed("page-1-4"), 3);
}

#[test]
fn sessions_are_debug_printable() {
    // Error paths hand a Result<Session> to callers (and to unwrap_err in
    // the tests below), so the session and its document must format.
    let session = paginated_session(three_by_three());
    let dump = format!("{session:?}");
    assert!(dump.contains("Paginated"));

    let tabular = tabular_session(workbook());
    assert!(format!("{tabular:?}").contains("Tabular"));
}

// ============================================================================
// Provider registry
// ============================================================================

#[test]
fn missing_provider_is_reported_as_unavailable() {
    let registry = ProviderRegistry::new();
    let err = Session::paginated(&registry, MatchParams::default()).unwrap_err();
    assert!(matches!(
        err,
        SelectError::ProviderUnavailable { kind: "page" }
    ));

    let err = Session::flowing(&registry, MatchParams::default()).unwrap_err();
    assert!(matches!(
        err,
        SelectError::ProviderUnavailable { kind: "block-tree" }
    ));
}

#[test]
fn registry_serves_multiple_kinds_independently() {
    let mut registry = ProviderRegistry::new();
    registry.register_pages(Box::new(StaticPageProvider::new(three_by_three())));
    registry.register_sheets(Box::new(StaticSheetProvider::new(workbook())));

    let paginated = Session::paginated(&registry, MatchParams::default()).unwrap();
    assert_eq!(paginated.document_kind(), DocumentKind::Paginated);
    assert_eq!(paginated.node_count(), 9);

    let tabular = Session::tabular(&registry, MatchParams::default()).unwrap();
    assert_eq!(tabular.sheets().len(), 2);
    assert_eq!(tabular.sheets()[0].column_count(), 3);
}
