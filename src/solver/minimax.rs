use crate::board::Board;
use crate::engine::apply::successors;
use crate::engine::score::evaluate;
use crate::hash::search_key;
use crate::types::{Color, Move};

use super::tt::{Bound, TTEntry, TranspositionTable, DEPTH_EXHAUSTIVE};

/// Exhaustive minimax: strict turn alternation, no depth bound. Recursion
/// ends only where the side to move has no legal move (game over, or a
/// single-player block). Every utility in the tree is measured from the
/// root color's perspective; the min side picks the move that hurts it most.
///
/// Tractable only for small boards or near the end of a game. Returns
/// (best move, value, nodes visited). The best move is `None` only when the
/// root itself has no legal move.
pub fn search_root(
    board: &Board,
    color: Color,
    tt: &mut dyn TranspositionTable,
) -> (Option<Move>, i32, u64) {
    let mut nodes = 0u64;
    let (best_move, value) = max_node(board, color, tt, &mut nodes);
    (best_move, value, nodes)
}

/// Only exhaustive exact entries settle a minimax probe; depth-limited
/// leftovers from the alpha-beta engine are static guesses, not values.
#[inline]
fn probe(tt: &mut dyn TranspositionTable, key: u128) -> Option<TTEntry> {
    tt.get(key)
        .filter(|e| e.depth == DEPTH_EXHAUSTIVE && e.flag == Bound::Exact)
}

fn max_node(
    board: &Board,
    color: Color,
    tt: &mut dyn TranspositionTable,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;
    let key = search_key(board, color, color);
    if let Some(entry) = probe(tt, key) {
        return (entry.best_move, entry.value);
    }

    let succs = successors(board, color);
    if succs.is_empty() {
        let value = evaluate(board, color);
        tt.put(
            key,
            TTEntry {
                value,
                depth: DEPTH_EXHAUSTIVE,
                flag: Bound::Exact,
                best_move: None,
            },
        );
        return (None, value);
    }

    // First-seen move wins ties: strict improvement only.
    let mut best_move: Option<Move> = None;
    let mut best_value = -board.utility_bound();
    for (mv, next) in &succs {
        let (_, value) = min_node(next, color, tt, nodes);
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(*mv);
        }
    }

    tt.put(
        key,
        TTEntry {
            value: best_value,
            depth: DEPTH_EXHAUSTIVE,
            flag: Bound::Exact,
            best_move,
        },
    );
    (best_move, best_value)
}

fn min_node(
    board: &Board,
    color: Color,
    tt: &mut dyn TranspositionTable,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;
    let mover = color.other();
    let key = search_key(board, mover, color);
    if let Some(entry) = probe(tt, key) {
        return (entry.best_move, entry.value);
    }

    let succs = successors(board, mover);
    if succs.is_empty() {
        let value = evaluate(board, color);
        tt.put(
            key,
            TTEntry {
                value,
                depth: DEPTH_EXHAUSTIVE,
                flag: Bound::Exact,
                best_move: None,
            },
        );
        return (None, value);
    }

    let mut best_move: Option<Move> = None;
    let mut best_value = board.utility_bound();
    for (mv, next) in &succs {
        let (_, value) = max_node(next, color, tt, nodes);
        if best_move.is_none() || value < best_value {
            best_value = value;
            best_move = Some(*mv);
        }
    }

    tt.put(
        key,
        TTEntry {
            value: best_value,
            depth: DEPTH_EXHAUSTIVE,
            flag: Bound::Exact,
            best_move,
        },
    );
    (best_move, best_value)
}
