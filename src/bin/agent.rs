use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use revello::{load_config_from_json, protocol, CachePolicy, EngineConfig, Strategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyOpt {
    /// Exhaustive search to game end (small boards only)
    Minimax,
    /// Depth-limited alpha-beta with move ordering
    Alphabeta,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CacheOpt {
    /// One transposition table for the whole game
    PerProcess,
    /// Cleared before every move selection
    PerMove,
}

#[derive(Debug, Parser)]
#[command(
    name = "agent",
    about = "Revello protocol engine: speaks the manager's line protocol on stdin/stdout"
)]
struct Args {
    /// Engine config JSON path; the flags below override file values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name announced to the manager
    #[arg(long)]
    name: Option<String>,

    /// Search strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyOpt>,

    /// Alpha-beta depth limit in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Transposition cache lifecycle
    #[arg(long, value_enum)]
    cache: Option<CacheOpt>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_from_json(path).map_err(|e| format!("Config error: {e}"))?,
        None => EngineConfig::default(),
    };
    if let Some(name) = args.name {
        config.name = name;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = match strategy {
            StrategyOpt::Minimax => Strategy::Minimax,
            StrategyOpt::Alphabeta => Strategy::AlphaBeta,
        };
    }
    if let Some(depth) = args.depth {
        config.depth_limit = depth;
    }
    if let Some(cache) = args.cache {
        config.cache_policy = match cache {
            CacheOpt::PerProcess => CachePolicy::PerProcess,
            CacheOpt::PerMove => CachePolicy::PerMove,
        };
    }
    config.validate().map_err(|e| format!("Config error: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    protocol::run_engine(&mut reader, &mut writer, &config)
        .map_err(|e| format!("Protocol error: {e}"))?;
    Ok(())
}
