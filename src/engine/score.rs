use crate::board::Board;
use crate::types::Color;

/// Disk counts as (dark, light).
#[inline]
pub fn score(board: &Board) -> (u32, u32) {
    (board.count(Color::Dark), board.count(Color::Light))
}

/// Static utility from `perspective`: own disks minus opponent disks.
/// Bounded by `board.utility_bound()` in magnitude; zero is balanced.
#[inline]
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let (dark, light) = score(board);
    match perspective {
        Color::Dark => dark as i32 - light as i32,
        Color::Light => light as i32 - dark as i32,
    }
}
