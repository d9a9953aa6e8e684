use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::solver::{SearchLimits, Strategy};

/// Transposition table lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    /// One table for the whole game (reference behavior).
    PerProcess,
    /// Cleared before every move selection.
    PerMove,
}

/// Engine configuration, loadable from JSON. Missing fields fall back to
/// the defaults, so a partial file like `{"depth_limit": 4}` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name announced to the manager on startup.
    pub name: String,
    pub strategy: Strategy,
    /// Alpha-beta ply budget. Must be at least 1.
    pub depth_limit: u8,
    pub cache_policy: CachePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: "Revello".to_string(),
            strategy: Strategy::AlphaBeta,
            depth_limit: SearchLimits::default().depth_limit,
            cache_policy: CachePolicy::PerProcess,
        }
    }
}

impl EngineConfig {
    #[inline]
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            depth_limit: self.depth_limit,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("engine name must not be empty".to_string());
        }
        if self.depth_limit == 0 {
            return Err("depth_limit must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Load an engine config from a JSON file (runtime).
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> Result<EngineConfig, String> {
    let data =
        fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    let config: EngineConfig =
        serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    config.validate()?;
    Ok(config)
}
