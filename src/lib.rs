#![forbid(unsafe_code)]

pub mod types;
pub mod board;
pub mod rules;
pub mod hash;
pub mod config;
pub mod protocol;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::config::{load_config_from_json, CachePolicy, EngineConfig};
pub use crate::engine::apply::{apply_move, successors};
pub use crate::engine::score::{evaluate, score};
pub use crate::hash::search_key;
pub use crate::rules::{has_legal_move, is_legal, is_terminal, legal_moves};
pub use crate::solver::{
    select_move, InMemoryTT, SearchLimits, SearchReport, Strategy, TranspositionTable,
};
pub use crate::types::{Cell, Color, Move};
