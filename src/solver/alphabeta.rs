use crate::board::Board;
use crate::engine::apply::successors;
use crate::engine::score::evaluate;
use crate::hash::search_key;
use crate::types::{Color, Move};

use super::move_order::order_successors;
use super::tt::{Bound, TTEntry, TranspositionTable, DEPTH_EXHAUSTIVE};
use super::SearchLimits;

/// Depth-limited alpha-beta. Same tree and perspective conventions as the
/// minimax engine, plus: nodes at `level == limit` fall back to the static
/// evaluation, successors are expanded in static-eval order, and subtrees
/// that cannot affect the root choice are cut off against the (alpha, beta)
/// window.
///
/// Cache entries are bound-tagged with the window they were computed under
/// and only reused where `TTEntry::resolves` proves them applicable, so
/// reuse never changes a returned value, only the node count.
pub fn search_root(
    board: &Board,
    color: Color,
    limits: SearchLimits,
    tt: &mut dyn TranspositionTable,
) -> (Option<Move>, i32, u64) {
    let bound = board.utility_bound();
    let mut nodes = 0u64;
    let (best_move, value) = max_node(
        board,
        color,
        -bound,
        bound,
        0,
        limits.depth_limit,
        tt,
        &mut nodes,
    );
    (best_move, value, nodes)
}

/// Store a leaf. A node with no legal move is exact at any depth (the
/// exhaustive engines would return the same value); a horizon leaf is only
/// a depth-0 fact.
#[inline]
fn put_leaf(tt: &mut dyn TranspositionTable, key: u128, value: i32, exhausted: bool) {
    tt.put(
        key,
        TTEntry {
            value,
            depth: if exhausted { DEPTH_EXHAUSTIVE } else { 0 },
            flag: Bound::Exact,
            best_move: None,
        },
    );
}

#[inline]
fn bound_for(value: i32, alpha0: i32, beta0: i32) -> Bound {
    if value <= alpha0 {
        Bound::Upper
    } else if value >= beta0 {
        Bound::Lower
    } else {
        Bound::Exact
    }
}

#[allow(clippy::too_many_arguments)]
fn max_node(
    board: &Board,
    color: Color,
    mut alpha: i32,
    beta: i32,
    level: u8,
    limit: u8,
    tt: &mut dyn TranspositionTable,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;
    let remaining = limit - level;
    let key = search_key(board, color, color);

    let mut tt_best: Option<Move> = None;
    if let Some(entry) = tt.get(key) {
        if entry.resolves(remaining, alpha, beta) {
            return (entry.best_move, entry.value);
        }
        // Too shallow or wrong-bounded: still a good first try.
        tt_best = entry.best_move;
    }

    if level == limit {
        let value = evaluate(board, color);
        put_leaf(tt, key, value, false);
        return (None, value);
    }

    let mut succs = successors(board, color);
    if succs.is_empty() {
        let value = evaluate(board, color);
        put_leaf(tt, key, value, true);
        return (None, value);
    }
    order_successors(&mut succs, color, true, tt_best);

    let alpha0 = alpha;
    let mut best_move: Option<Move> = None;
    let mut best_value = -board.utility_bound();
    for (mv, next) in &succs {
        let (_, value) = min_node(next, color, alpha, beta, level + 1, limit, tt, nodes);
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(*mv);
        }
        if best_value >= beta {
            // Fail high: remaining candidates cannot matter.
            tt.put(
                key,
                TTEntry {
                    value: best_value,
                    depth: remaining,
                    flag: Bound::Lower,
                    best_move,
                },
            );
            return (best_move, best_value);
        }
        if best_value > alpha {
            alpha = best_value;
        }
    }

    tt.put(
        key,
        TTEntry {
            value: best_value,
            depth: remaining,
            flag: bound_for(best_value, alpha0, beta),
            best_move,
        },
    );
    (best_move, best_value)
}

#[allow(clippy::too_many_arguments)]
fn min_node(
    board: &Board,
    color: Color,
    alpha: i32,
    mut beta: i32,
    level: u8,
    limit: u8,
    tt: &mut dyn TranspositionTable,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;
    let remaining = limit - level;
    let mover = color.other();
    let key = search_key(board, mover, color);

    let mut tt_best: Option<Move> = None;
    if let Some(entry) = tt.get(key) {
        if entry.resolves(remaining, alpha, beta) {
            return (entry.best_move, entry.value);
        }
        tt_best = entry.best_move;
    }

    if level == limit {
        let value = evaluate(board, color);
        put_leaf(tt, key, value, false);
        return (None, value);
    }

    let mut succs = successors(board, mover);
    if succs.is_empty() {
        let value = evaluate(board, color);
        put_leaf(tt, key, value, true);
        return (None, value);
    }
    order_successors(&mut succs, color, false, tt_best);

    let beta0 = beta;
    let mut best_move: Option<Move> = None;
    let mut best_value = board.utility_bound();
    for (mv, next) in &succs {
        let (_, value) = max_node(next, color, alpha, beta, level + 1, limit, tt, nodes);
        if best_move.is_none() || value < best_value {
            best_value = value;
            best_move = Some(*mv);
        }
        if best_value <= alpha {
            // Fail low: the maximizer already has better elsewhere.
            tt.put(
                key,
                TTEntry {
                    value: best_value,
                    depth: remaining,
                    flag: Bound::Upper,
                    best_move,
                },
            );
            return (best_move, best_value);
        }
        if best_value < beta {
            beta = best_value;
        }
    }

    tt.put(
        key,
        TTEntry {
            value: best_value,
            depth: remaining,
            flag: bound_for(best_value, alpha, beta0),
            best_move,
        },
    );
    (best_move, best_value)
}
