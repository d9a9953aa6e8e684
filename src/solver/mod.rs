use serde::Deserialize;

use crate::board::Board;
use crate::types::{Color, Move};

pub mod alphabeta;
pub mod minimax;
pub mod move_order;
pub mod tt;

pub use tt::{Bound, InMemoryTT, TTEntry, TTStats, TranspositionTable, DEPTH_EXHAUSTIVE};

/// Which engine the driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Exhaustive search to game end. Only viable on small boards or late
    /// positions.
    Minimax,
    /// Depth-limited search with pruning and move ordering.
    AlphaBeta,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum plies before falling back to static evaluation. Ignored by
    /// the minimax engine.
    pub depth_limit: u8,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth_limit: 6, // deepest that stays inside the manager's per-move budget on 8x8
        }
    }
}

/// Outcome of one move selection. `best_move` is `None` only when the side
/// to move has no legal move at the root, in which case the caller passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Option<Move>,
    pub value: i32,
    pub nodes: u64,
}

/// Run the selected engine over `board` for `color`. The caller owns the
/// table and decides its lifetime (per process, per move); both engines
/// share it soundly because entries are context-keyed and bound-tagged.
pub fn select_move(
    board: &Board,
    color: Color,
    strategy: Strategy,
    limits: SearchLimits,
    tt: &mut dyn TranspositionTable,
) -> SearchReport {
    let (best_move, value, nodes) = match strategy {
        Strategy::Minimax => minimax::search_root(board, color, tt),
        Strategy::AlphaBeta => alphabeta::search_root(board, color, limits, tt),
    };
    SearchReport {
        best_move,
        value,
        nodes,
    }
}
