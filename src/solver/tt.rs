use hashbrown::HashMap;

use crate::types::Move;

/// Depth recorded for entries computed by exhaustive search: usable at any
/// requested depth, and the only depth the minimax engine will accept.
pub const DEPTH_EXHAUSTIVE: u8 = u8::MAX;

/// Bound type for alpha-beta aware cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower, // value is a lower bound (failed high against beta)
    Upper, // value is an upper bound (failed low against alpha)
}

/// Transposition table entry: value with its bound kind, the remaining depth
/// it was searched to, and the best move for ordering.
///
/// The key the entry lives under already encodes (board, side to move,
/// perspective color), so a hit is always for a semantically matching node.
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub value: i32,
    pub depth: u8,
    pub flag: Bound,
    pub best_move: Option<Move>,
}

impl TTEntry {
    /// Whether the stored value settles a probe at `depth` under the window
    /// (`alpha`, `beta`). Exact values are usable outright; bound values only
    /// when they already prove a cutoff.
    #[inline]
    pub fn resolves(&self, depth: u8, alpha: i32, beta: i32) -> bool {
        self.depth >= depth
            && match self.flag {
                Bound::Exact => true,
                Bound::Lower => self.value >= beta,
                Bound::Upper => self.value <= alpha,
            }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TTStats {
    pub gets: u64,
    pub hits: u64,
    pub puts: u64,
    pub exact_count: u64,
    pub lower_count: u64,
    pub upper_count: u64,
}

pub trait TranspositionTable {
    fn get(&mut self, key: u128) -> Option<TTEntry>;
    fn put(&mut self, key: u128, entry: TTEntry);
    fn clear(&mut self);
    fn len(&self) -> usize;
}

/// In-memory hash map table with depth-preferred replacement. Unbounded:
/// a single game stores at most one entry per reachable node context.
#[derive(Debug, Default)]
pub struct InMemoryTT {
    map: HashMap<u128, TTEntry>,
    stats: TTStats,
}

impl InMemoryTT {
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity(cap),
            stats: TTStats::default(),
        }
    }

    /// Snapshot of probe/store counters.
    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }
}

impl TranspositionTable for InMemoryTT {
    #[inline]
    fn get(&mut self, key: u128) -> Option<TTEntry> {
        self.stats.gets = self.stats.gets.saturating_add(1);
        let entry = self.map.get(&key).copied();
        if entry.is_some() {
            self.stats.hits = self.stats.hits.saturating_add(1);
        }
        entry
    }

    #[inline]
    fn put(&mut self, key: u128, entry: TTEntry) {
        self.stats.puts = self.stats.puts.saturating_add(1);
        match entry.flag {
            Bound::Exact => self.stats.exact_count = self.stats.exact_count.saturating_add(1),
            Bound::Lower => self.stats.lower_count = self.stats.lower_count.saturating_add(1),
            Bound::Upper => self.stats.upper_count = self.stats.upper_count.saturating_add(1),
        }

        // Depth-preferred replacement: replace if new.depth >= old.depth
        let replace = match self.map.get(&key) {
            Some(old) => entry.depth >= old.depth,
            None => true,
        };
        if replace {
            self.map.insert(key, entry);
        }
    }

    #[inline]
    fn clear(&mut self) {
        self.map.clear();
        self.stats = TTStats::default();
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }
}
