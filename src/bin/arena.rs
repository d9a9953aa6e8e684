use clap::{Parser, ValueEnum};
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use revello::solver::InMemoryTT;
use revello::{
    apply_move, evaluate, has_legal_move, legal_moves, score, select_move, Board, Cell, Color,
    Move, SearchLimits, Strategy,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerOpt {
    /// Depth-limited alpha-beta
    Alphabeta,
    /// Exhaustive minimax (small boards only)
    Minimax,
    /// Uniform random over legal moves, seeded
    Random,
}

#[derive(Debug, Parser)]
#[command(
    name = "arena",
    about = "Local Revello games without the manager: engine vs engine or vs a random baseline"
)]
struct Args {
    /// Dark player (moves first)
    #[arg(long, value_enum, default_value_t = PlayerOpt::Alphabeta)]
    dark: PlayerOpt,

    /// Light player
    #[arg(long, value_enum, default_value_t = PlayerOpt::Random)]
    light: PlayerOpt,

    /// Board dimension (even, at least 4)
    #[arg(long, default_value_t = 8)]
    size: u8,

    /// Alpha-beta depth limit in plies
    #[arg(long, default_value_t = 6)]
    depth: u8,

    /// Seed for the random baseline
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

fn print_board(board: &Board) {
    for row in 0..board.n() {
        for col in 0..board.n() {
            let glyph = match board.get(col, row) {
                Cell::Empty => '.',
                Cell::Dark => 'D',
                Cell::Light => 'L',
            };
            print!("{glyph} ");
        }
        println!();
    }
}

/// One player's turn: `None` means pass.
fn pick_move(
    player: PlayerOpt,
    board: &Board,
    color: Color,
    limits: SearchLimits,
    tt: &mut InMemoryTT,
    rng: &mut Pcg64,
) -> Option<Move> {
    match player {
        PlayerOpt::Alphabeta => {
            select_move(board, color, Strategy::AlphaBeta, limits, tt).best_move
        }
        PlayerOpt::Minimax => select_move(board, color, Strategy::Minimax, limits, tt).best_move,
        PlayerOpt::Random => {
            let moves = legal_moves(board, color);
            if moves.is_empty() {
                None
            } else {
                Some(moves[rng.gen_range(0..moves.len())])
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.depth == 0 {
        return Err("depth must be at least 1".into());
    }

    let mut board = Board::standard(args.size).map_err(|e| format!("Board error: {e}"))?;
    let limits = SearchLimits {
        depth_limit: args.depth,
    };
    let mut rng = Pcg64::seed_from_u64(args.seed);

    // One table per side, as two separate engine processes would have.
    let mut tt_dark = InMemoryTT::default();
    let mut tt_light = InMemoryTT::default();

    let mut mover = Color::Dark;
    let mut turn = 0u32;
    loop {
        if !has_legal_move(&board, mover) {
            if !has_legal_move(&board, mover.other()) {
                break; // both blocked: game over
            }
            if !args.quiet {
                println!("Turn {turn}: {mover:?} passes");
            }
            mover = mover.other();
            continue;
        }

        let (player, tt) = match mover {
            Color::Dark => (args.dark, &mut tt_dark),
            Color::Light => (args.light, &mut tt_light),
        };
        let mv = pick_move(player, &board, mover, limits, tt, &mut rng)
            .ok_or_else(|| format!("{mover:?} reported a pass with legal moves available"))?;
        board = apply_move(&board, mover, mv).map_err(|e| format!("apply_move failed: {e}"))?;

        turn += 1;
        if !args.quiet {
            println!("Turn {turn}: {mover:?} plays {} {}", mv.col, mv.row);
            print_board(&board);
            let (dark, light) = score(&board);
            println!("Score {dark}-{light}");
        }
        mover = mover.other();
    }

    let (dark, light) = score(&board);
    println!("Final score {dark}-{light}");
    match evaluate(&board, Color::Dark) {
        d if d > 0 => println!("Dark wins by {d}"),
        d if d < 0 => println!("Light wins by {}", -d),
        _ => println!("Draw"),
    }
    Ok(())
}
