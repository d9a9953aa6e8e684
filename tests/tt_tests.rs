use revello::solver::{Bound, InMemoryTT, TTEntry, TranspositionTable, DEPTH_EXHAUSTIVE};
use revello::{apply_move, search_key, Board, Cell, Color, Move};

fn entry(value: i32, depth: u8, flag: Bound) -> TTEntry {
    TTEntry {
        value,
        depth,
        flag,
        best_move: Some(Move::new(0, 0)),
    }
}

#[test]
fn replacement_is_depth_preferred() {
    let mut tt = InMemoryTT::default();
    let key = 42u128;

    tt.put(key, entry(5, 3, Bound::Exact));
    tt.put(key, entry(9, 1, Bound::Exact));
    let kept = tt.get(key).expect("entry present");
    assert_eq!((kept.value, kept.depth), (5, 3), "shallower store must lose");

    tt.put(key, entry(7, 3, Bound::Exact));
    let kept = tt.get(key).expect("entry present");
    assert_eq!(kept.value, 7, "equal depth refreshes the entry");

    tt.put(key, entry(1, 5, Bound::Exact));
    let kept = tt.get(key).expect("entry present");
    assert_eq!((kept.value, kept.depth), (1, 5), "deeper store must win");
}

#[test]
fn probe_respects_bound_semantics() {
    let exact = entry(3, 4, Bound::Exact);
    assert!(exact.resolves(4, -10, 10));
    assert!(exact.resolves(2, -10, 10), "deeper entries serve shallower probes");
    assert!(!exact.resolves(5, -10, 10), "too shallow for the probe");

    let lower = entry(10, 4, Bound::Lower);
    assert!(lower.resolves(4, 0, 10), "proves the fail-high cutoff");
    assert!(lower.resolves(4, 0, 8));
    assert!(!lower.resolves(4, 0, 11), "cannot answer a wider window");

    let upper = entry(-2, 4, Bound::Upper);
    assert!(upper.resolves(4, -2, 10), "proves the fail-low cutoff");
    assert!(!upper.resolves(4, -3, 10), "cannot answer a wider window");
}

#[test]
fn exhaustive_entries_serve_any_depth() {
    let e = entry(0, DEPTH_EXHAUSTIVE, Bound::Exact);
    for depth in [0u8, 6, 60, DEPTH_EXHAUSTIVE] {
        assert!(e.resolves(depth, -64, 64));
    }
}

#[test]
fn keys_separate_mover_and_perspective() {
    let board = Board::standard(8).expect("standard board");
    let keys = [
        search_key(&board, Color::Dark, Color::Dark),
        search_key(&board, Color::Light, Color::Dark),
        search_key(&board, Color::Dark, Color::Light),
        search_key(&board, Color::Light, Color::Light),
    ];
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b, "contexts over the same cells must not collide");
        }
    }

    let mut tt = InMemoryTT::default();
    tt.put(keys[0], entry(12, 6, Bound::Exact));
    assert!(tt.get(keys[1]).is_none());
    assert!(tt.get(keys[2]).is_none());
    assert_eq!(tt.len(), 1);
}

#[test]
fn keys_are_structural_not_positional() {
    // The same cells give the same key however the board was produced.
    let board = Board::standard(8).expect("standard board");
    let reached = apply_move(&board, Color::Dark, Move::new(3, 2)).expect("legal move");

    let mut cells = vec![Cell::Empty; 64];
    cells[2 * 8 + 3] = Cell::Dark; // the placed disk
    cells[3 * 8 + 3] = Cell::Dark; // the flipped center
    cells[3 * 8 + 4] = Cell::Dark;
    cells[4 * 8 + 3] = Cell::Dark;
    cells[4 * 8 + 4] = Cell::Light;
    let rebuilt = Board::from_cells(8, cells).expect("rebuilt board");

    assert_eq!(reached, rebuilt);
    assert_eq!(
        search_key(&reached, Color::Light, Color::Dark),
        search_key(&rebuilt, Color::Light, Color::Dark)
    );
    assert_ne!(
        search_key(&reached, Color::Light, Color::Dark),
        search_key(&board, Color::Light, Color::Dark),
        "different cells, different key"
    );
}

#[test]
fn clear_resets_entries_and_stats() {
    let mut tt = InMemoryTT::default();
    tt.put(1, entry(1, 1, Bound::Exact));
    tt.put(2, entry(2, 2, Bound::Lower));
    let _ = tt.get(1);
    assert_eq!(tt.len(), 2);

    tt.clear();
    assert_eq!(tt.len(), 0);
    assert!(tt.get(1).is_none());
    let stats = tt.stats();
    assert_eq!(stats.puts, 0);
    // One get since the clear, zero hits.
    assert_eq!((stats.gets, stats.hits), (1, 0));
}

#[test]
fn stats_track_probes_and_stores() {
    let mut tt = InMemoryTT::default();
    assert!(tt.get(7).is_none());
    tt.put(7, entry(1, 1, Bound::Exact));
    tt.put(8, entry(2, 1, Bound::Lower));
    tt.put(9, entry(3, 1, Bound::Upper));
    assert!(tt.get(7).is_some());

    let stats = tt.stats();
    assert_eq!(stats.gets, 2);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.puts, 3);
    assert_eq!(
        (stats.exact_count, stats.lower_count, stats.upper_count),
        (1, 1, 1)
    );
}
