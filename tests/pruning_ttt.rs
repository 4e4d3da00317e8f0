//! Integration test: pruning never changes the value of a position
use std::collections::HashSet;

use tictac::{
    board::Board,
    core::PlayerMark,
    eval::game_status,
    search::{Searcher, ALPHA_INIT, BETA_INIT},
};

/// Every position reachable from the empty board when `first` opens.
fn reachable(first: PlayerMark) -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) || game_status(&b).is_over() {
            continue;
        }
        let mark = b.to_move(first);
        for mv in b.empty_cells() {
            let mut child = b;
            child.place(mv, mark).unwrap();
            stack.push(child);
        }
    }
    seen
}

#[test]
fn reachable_position_count() {
    assert_eq!(reachable(PlayerMark::Cross).len(), 5478);
}

#[test]
fn pruned_value_matches_plain_minimax() {
    for first in [PlayerMark::Cross, PlayerMark::Naught] {
        for b in reachable(first) {
            let maximizing = b.to_move(first).is_maximizing();
            let mut pruned = Searcher::new();
            let mut full = Searcher::new();
            let before = b;
            let value = pruned.search(&b, maximizing, ALPHA_INIT, BETA_INIT);
            assert_eq!(value, full.minimax(&b, maximizing), "\n{b}");
            assert!(pruned.nodes_visited() <= full.nodes_visited());
            assert_eq!(b, before);
        }
    }
}

#[test]
fn narrow_window_still_bounds_the_value() {
    let b: Board = "x__/_o_/___".parse().unwrap();
    let mut s = Searcher::new();
    assert_eq!(s.minimax(&b, true), 0);
    // a value outside the window is only a bound, on the same side as the true value
    assert!(s.search(&b, true, 5, BETA_INIT) <= 5);
    assert!(s.search(&b, true, ALPHA_INIT, -5) >= -5);
}
