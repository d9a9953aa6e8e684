use proptest::prelude::*;

use revello::rules::flips_for;
use revello::{
    apply_move, has_legal_move, is_legal, is_terminal, legal_moves, Board, Cell, Color, Move,
};

fn board_from(rows: &[&str]) -> Board {
    let n = rows.len() as u8;
    let mut cells = Vec::new();
    for row in rows {
        for ch in row.chars().filter(|c| !c.is_whitespace()) {
            cells.push(match ch {
                '.' => Cell::Empty,
                'D' => Cell::Dark,
                'L' => Cell::Light,
                other => panic!("bad cell glyph {other:?}"),
            });
        }
    }
    Board::from_cells(n, cells).expect("well-formed test board")
}

#[test]
fn opening_moves_are_the_four_diagonal_cells() {
    let board = Board::standard(8).expect("standard board");

    // Dark first: the four cells diagonally adjacent to the center block,
    // in row-major enumeration order.
    let dark = legal_moves(&board, Color::Dark);
    assert_eq!(
        dark,
        vec![
            Move::new(3, 2),
            Move::new(2, 3),
            Move::new(5, 4),
            Move::new(4, 5)
        ],
        "dark opening moves"
    );

    let light = legal_moves(&board, Color::Light);
    assert_eq!(
        light,
        vec![
            Move::new(4, 2),
            Move::new(5, 3),
            Move::new(2, 4),
            Move::new(3, 5)
        ],
        "light opening moves"
    );
}

#[test]
fn occupied_or_unbracketed_cells_are_illegal() {
    let board = Board::standard(8).expect("standard board");
    assert!(!is_legal(&board, Color::Dark, Move::new(3, 3)), "occupied");
    assert!(!is_legal(&board, Color::Dark, Move::new(0, 0)), "no bracket");
    assert!(!is_legal(&board, Color::Dark, Move::new(8, 0)), "off board");
}

#[test]
fn opening_move_flips_exactly_one_disk() {
    let board = Board::standard(8).expect("standard board");
    assert_eq!(flips_for(&board, Color::Dark, Move::new(3, 2)), vec![(3, 3)]);
}

#[test]
fn flips_follow_every_bracketed_ray() {
    // Dark at (0,0) brackets along the row and the diagonal at once.
    let board = board_from(&[
        ".LLD", //
        ".L..", //
        "..D.", //
        "....",
    ]);
    let mut flips = flips_for(&board, Color::Dark, Move::new(0, 0));
    flips.sort_unstable();
    assert_eq!(flips, vec![(1, 0), (1, 1), (2, 0)]);
}

#[test]
fn blocked_player_passes_while_game_continues() {
    let board = board_from(&[
        ".DDL", //
        "....", //
        "....", //
        "....",
    ]);
    assert!(legal_moves(&board, Color::Dark).is_empty(), "dark is blocked");
    assert!(has_legal_move(&board, Color::Light), "light can still play");
    assert!(!is_terminal(&board));
}

#[test]
fn full_board_is_terminal() {
    let board = board_from(&[
        "DDLL", //
        "LLDD", //
        "DDLL", //
        "LLDD",
    ]);
    assert!(is_terminal(&board));
    assert!(!is_terminal(&Board::standard(8).expect("standard board")));
}

fn cells_4x4() -> impl Strategy<Value = Vec<Cell>> {
    prop::collection::vec(0u8..3u8, 16).prop_map(|raw| {
        raw.into_iter()
            .map(|v| match v {
                0 => Cell::Empty,
                1 => Cell::Dark,
                _ => Cell::Light,
            })
            .collect()
    })
}

proptest! {
    /// Every legal move flips at least one disk, and applying it moves the
    /// counts exactly: own +flips+1, opponent -flips, one more filled cell.
    #[test]
    fn legal_moves_flip_and_apply(cells in cells_4x4()) {
        let board = Board::from_cells(4, cells).expect("4x4 board");
        for color in [Color::Dark, Color::Light] {
            for mv in legal_moves(&board, color) {
                prop_assert_eq!(board.get(mv.col, mv.row), Cell::Empty);
                let flips = flips_for(&board, color, mv);
                prop_assert!(!flips.is_empty(), "legal move ({}, {}) flips nothing", mv.col, mv.row);
                let next = apply_move(&board, color, mv).expect("legal move applies");
                prop_assert_eq!(next.count(color), board.count(color) + flips.len() as u32 + 1);
                prop_assert_eq!(next.count(color.other()), board.count(color.other()) - flips.len() as u32);
                prop_assert_eq!(next.filled_count(), board.filled_count() + 1);
            }
        }
    }

    /// `legal_moves` is exactly the row-major enumeration of cells where
    /// `is_legal` holds.
    #[test]
    fn legal_moves_match_is_legal(cells in cells_4x4()) {
        let board = Board::from_cells(4, cells).expect("4x4 board");
        for color in [Color::Dark, Color::Light] {
            let mut expected = Vec::new();
            for row in 0..4 {
                for col in 0..4 {
                    if is_legal(&board, color, Move::new(col, row)) {
                        expected.push(Move::new(col, row));
                    }
                }
            }
            prop_assert_eq!(legal_moves(&board, color), expected);
        }
    }
}
