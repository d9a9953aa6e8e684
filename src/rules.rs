use crate::board::Board;
use crate::types::{Cell, Color, Move};

/// The eight ray directions as (dcol, drow).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Whether the ray from `mv` in direction (dc, dr) holds at least one
/// opponent disk terminated by an own disk.
fn ray_is_bracketed(board: &Board, color: Color, mv: Move, dc: i8, dr: i8) -> bool {
    let own = color.cell();
    let opp = color.other().cell();
    let mut c = i16::from(mv.col) + i16::from(dc);
    let mut r = i16::from(mv.row) + i16::from(dr);
    let mut seen_opponent = false;

    while board.in_bounds(c, r) {
        match board.get(c as u8, r as u8) {
            cell if cell == opp => {
                seen_opponent = true;
                c += i16::from(dc);
                r += i16::from(dr);
            }
            cell if cell == own => return seen_opponent,
            _ => return false,
        }
    }
    false
}

/// Append the coordinates flipped along one bracketed ray.
fn ray_collect(board: &Board, color: Color, mv: Move, dc: i8, dr: i8, out: &mut Vec<(u8, u8)>) {
    if !ray_is_bracketed(board, color, mv, dc, dr) {
        return;
    }
    let opp = color.other().cell();
    let mut c = i16::from(mv.col) + i16::from(dc);
    let mut r = i16::from(mv.row) + i16::from(dr);
    while board.in_bounds(c, r) && board.get(c as u8, r as u8) == opp {
        out.push((c as u8, r as u8));
        c += i16::from(dc);
        r += i16::from(dr);
    }
}

/// Every disk `mv` would flip for `color`, across all eight rays.
/// Empty result means the move is illegal (a legal move flips at least one).
pub fn flips_for(board: &Board, color: Color, mv: Move) -> Vec<(u8, u8)> {
    let mut flips = Vec::new();
    if mv.col >= board.n() || mv.row >= board.n() {
        return flips;
    }
    if board.get(mv.col, mv.row) != Cell::Empty {
        return flips;
    }
    for (dc, dr) in DIRECTIONS {
        ray_collect(board, color, mv, dc, dr, &mut flips);
    }
    flips
}

#[inline]
pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
    mv.col < board.n()
        && mv.row < board.n()
        && board.get(mv.col, mv.row) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&(dc, dr)| ray_is_bracketed(board, color, mv, dc, dr))
}

/// Ordered legal moves for `color`: row ascending, then column ascending.
/// Search tie-breaking follows this enumeration order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..board.n() {
        for col in 0..board.n() {
            let mv = Move::new(col, row);
            if is_legal(board, color, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

#[inline]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    for row in 0..board.n() {
        for col in 0..board.n() {
            if is_legal(board, color, Move::new(col, row)) {
                return true;
            }
        }
    }
    false
}

/// Game over: neither side can move.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Color::Dark) && !has_legal_move(board, Color::Light)
}
