use crate::board::Board;
use crate::rules::{flips_for, legal_moves};
use crate::types::{Color, Move};

/// Place a disk and flip the bracketed lines, without re-validating.
/// `flips` must come from `rules::flips_for` on the same (board, color, mv).
fn place_and_flip(board: &Board, color: Color, mv: Move, flips: &[(u8, u8)]) -> Board {
    let mut next = board.clone();
    next.set(mv.col, mv.row, color.cell());
    for &(c, r) in flips {
        next.set(c, r, color.cell());
    }
    next
}

/// Apply a validated move for `color`, returning the successor board.
/// The input board is untouched.
pub fn apply_move(board: &Board, color: Color, mv: Move) -> Result<Board, String> {
    if mv.col >= board.n() || mv.row >= board.n() {
        return Err(format!(
            "move ({}, {}) out of range for a {}x{} board",
            mv.col,
            mv.row,
            board.n(),
            board.n()
        ));
    }
    let flips = flips_for(board, color, mv);
    if flips.is_empty() {
        return Err(format!("move ({}, {}) flips no disks", mv.col, mv.row));
    }
    Ok(place_and_flip(board, color, mv, &flips))
}

/// Every legal move for `color` paired with its successor board, in the
/// same enumeration order as `rules::legal_moves`. Empty result means pass.
pub fn successors(board: &Board, color: Color) -> Vec<(Move, Board)> {
    let mut out = Vec::new();
    for mv in legal_moves(board, color) {
        let flips = flips_for(board, color, mv);
        out.push((mv, place_and_flip(board, color, mv, &flips)));
    }
    out
}
