//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for one engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Defensive cap on any single reverse fan-out set. A traversal whose
    /// parent set exceeds this is rejected with `ExcessiveFanout` instead of
    /// attempting unbounded work.
    pub max_reverse_fanout: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_reverse_fanout: 1000,
        }
    }
}

impl EngineConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var("GAMEDATA_MAX_REVERSE_FANOUT") {
            if let Ok(value) = raw.parse() {
                cfg.max_reverse_fanout = value;
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap() {
        assert_eq!(EngineConfig::default().max_reverse_fanout, 1000);
    }
}
