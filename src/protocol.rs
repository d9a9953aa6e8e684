//! Line protocol spoken with the controlling game manager.
//!
//! One message per line, in this order:
//! 1. the engine announces its name;
//! 2. the manager sends the engine's color, `1` (dark, moves first) or `2`;
//! 3. per turn, the manager sends `SCORE <dark> <light>` followed by one
//!    line holding the whole board, or `FINAL <dark> <light>` to end the
//!    game with no further output expected;
//! 4. the engine replies `<column> <row>`, or `-1 -1` when it has no legal
//!    move (the pass sentinel: protocol-valid, outside any board).
//!
//! Board line grammar (the manager's nested-list literal, parsed
//! defensively, never executed):
//!
//! ```text
//! board := '[' row (',' row)* ']'
//! row   := '[' cell (',' cell)* ']'
//! cell  := '0' | '1' | '2'        (empty, dark, light)
//! ```
//!
//! with arbitrary whitespace between tokens, rows all the same length, and
//! the row count equal to the row length. Anything else is a fatal error:
//! the protocol has no resynchronization, so the run loop surfaces the
//! first malformed line as `Err` and the process dies.

use std::io::{BufRead, Write};
use std::iter::Peekable;
use std::str::Chars;

use crate::board::Board;
use crate::config::{CachePolicy, EngineConfig};
use crate::solver::{select_move, InMemoryTT, TranspositionTable};
use crate::types::{Cell, Color, Move};

/// A parsed status line. Scores are reported as (dark, light).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Score { dark: u32, light: u32 },
    Final { dark: u32, light: u32 },
}

pub fn parse_color_line(line: &str) -> Result<Color, String> {
    let id: u8 = line
        .trim()
        .parse()
        .map_err(|_| format!("invalid color line {line:?} (expected 1 or 2)"))?;
    Color::from_protocol(id)
}

pub fn parse_status_line(line: &str) -> Result<GameStatus, String> {
    let mut parts = line.split_whitespace();
    let status = parts
        .next()
        .ok_or_else(|| "empty status line".to_string())?;
    let mut next_score = |which: &str| -> Result<u32, String> {
        parts
            .next()
            .ok_or_else(|| format!("status line {line:?} missing {which} score"))?
            .parse()
            .map_err(|_| format!("status line {line:?} has a non-numeric {which} score"))
    };
    let dark = next_score("dark")?;
    let light = next_score("light")?;
    if parts.next().is_some() {
        return Err(format!("trailing tokens in status line {line:?}"));
    }
    match status {
        "SCORE" => Ok(GameStatus::Score { dark, light }),
        "FINAL" => Ok(GameStatus::Final { dark, light }),
        other => Err(format!("unknown status {other:?} (expected SCORE or FINAL)")),
    }
}

fn skip_ws(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn expect(chars: &mut Peekable<Chars<'_>>, want: char) -> Result<(), String> {
    skip_ws(chars);
    match chars.next() {
        Some(c) if c == want => Ok(()),
        Some(c) => Err(format!("expected {want:?} in board line, found {c:?}")),
        None => Err(format!("expected {want:?} in board line, found end of line")),
    }
}

fn parse_cell(chars: &mut Peekable<Chars<'_>>) -> Result<Cell, String> {
    skip_ws(chars);
    let mut token = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        token.push(c);
        chars.next();
    }
    match token.as_str() {
        "0" => Ok(Cell::Empty),
        "1" => Ok(Cell::Dark),
        "2" => Ok(Cell::Light),
        "" => Err("expected a cell digit in board line".to_string()),
        other => Err(format!("invalid cell value {other} (expected 0, 1 or 2)")),
    }
}

fn parse_row(chars: &mut Peekable<Chars<'_>>) -> Result<Vec<Cell>, String> {
    expect(chars, '[')?;
    let mut row = vec![parse_cell(chars)?];
    loop {
        skip_ws(chars);
        match chars.next() {
            Some(',') => row.push(parse_cell(chars)?),
            Some(']') => return Ok(row),
            Some(c) => return Err(format!("expected ',' or ']' in row, found {c:?}")),
            None => return Err("unterminated row in board line".to_string()),
        }
    }
}

/// Parse one board line against the grammar above.
pub fn parse_board_line(line: &str) -> Result<Board, String> {
    let mut chars = line.chars().peekable();
    expect(&mut chars, '[')?;
    let mut rows = vec![parse_row(&mut chars)?];
    loop {
        skip_ws(&mut chars);
        match chars.next() {
            Some(',') => rows.push(parse_row(&mut chars)?),
            Some(']') => break,
            Some(c) => return Err(format!("expected ',' or ']' after row, found {c:?}")),
            None => return Err("unterminated board line".to_string()),
        }
    }
    skip_ws(&mut chars);
    if let Some(c) = chars.next() {
        return Err(format!("trailing {c:?} after board literal"));
    }

    let n = rows.len();
    if n > usize::from(u8::MAX) {
        return Err(format!("board dimension {n} too large"));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(format!(
                "row {i} has {} cells but the board has {n} rows",
                row.len()
            ));
        }
    }
    let cells: Vec<Cell> = rows.into_iter().flatten().collect();
    Board::from_cells(n as u8, cells)
}

/// Wire encoding of a chosen move: `column row`, or the pass sentinel.
pub fn format_move_line(mv: Option<Move>) -> String {
    match mv {
        Some(mv) => format!("{} {}", mv.col, mv.row),
        None => "-1 -1".to_string(),
    }
}

fn read_line<R: BufRead>(reader: &mut R, what: &str) -> Result<String, String> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .map_err(|e| format!("failed to read {what}: {e}"))?;
    if n == 0 {
        return Err(format!("unexpected end of input while reading {what}"));
    }
    Ok(line)
}

/// The engine side of the protocol, generic over the transport so tests can
/// drive it with in-memory buffers. Returns when the manager sends `FINAL`;
/// any malformed line is fatal and comes back as `Err`.
pub fn run_engine<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    config: &EngineConfig,
) -> Result<(), String> {
    config.validate()?;
    writeln!(writer, "{}", config.name).map_err(|e| format!("failed to write name: {e}"))?;
    writer.flush().map_err(|e| format!("flush failed: {e}"))?;

    let color = parse_color_line(&read_line(reader, "color line")?)?;
    eprintln!("[agent] playing {:?} (id {})", color, color.protocol_id());

    let mut tt = InMemoryTT::default();
    loop {
        match parse_status_line(&read_line(reader, "status line")?)? {
            GameStatus::Final { dark, light } => {
                eprintln!("[agent] final score {dark}-{light}");
                return Ok(());
            }
            GameStatus::Score { dark, light } => {
                let board = parse_board_line(&read_line(reader, "board line")?)?;
                if config.cache_policy == CachePolicy::PerMove {
                    tt.clear();
                }
                let report = select_move(&board, color, config.strategy, config.limits(), &mut tt);
                eprintln!(
                    "[agent] score {dark}-{light}: value {} after {} nodes ({} cached)",
                    report.value,
                    report.nodes,
                    tt.len()
                );
                writeln!(writer, "{}", format_move_line(report.best_move))
                    .map_err(|e| format!("failed to write move: {e}"))?;
                writer.flush().map_err(|e| format!("flush failed: {e}"))?;
            }
        }
    }
}
