use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnimaxError};

/// Default mobility denominator. Lower values favour positions with more total moves.
pub const DEFAULT_MOBILITY_DENOMINATOR: f64 = 7.5;
pub const DEFAULT_DEPTH: u32 = 3;
pub const DEFAULT_MAX_PLIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Divisor applied to the combined legal-move count in the unimax score.
    pub mobility_denominator: f64,
    /// Search depth limit in plies.
    pub depth: u32,
    /// Stop a simulated game after this many plies.
    pub max_plies: usize,
    /// Seed for move-order shuffling; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Record visited boards between plies so the search avoids returning to them.
    pub repetition_guard: bool,
    /// Moves in coordinate notation played before the search takes over.
    pub opening: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mobility_denominator: DEFAULT_MOBILITY_DENOMINATOR,
            depth: DEFAULT_DEPTH,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
            repetition_guard: false,
            opening: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Reads a JSON config file; missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.mobility_denominator.is_finite() || self.mobility_denominator <= 0.0 {
            return Err(UnimaxError::Config(format!(
                "mobility_denominator must be a positive number, got {}",
                self.mobility_denominator
            )));
        }
        if self.depth == 0 {
            return Err(UnimaxError::Config("depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{ "mobility_denominator": 9.0 }"#).unwrap();
        assert_eq!(cfg.mobility_denominator, 9.0);
        assert_eq!(cfg.depth, DEFAULT_DEPTH);
        assert!(!cfg.repetition_guard);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_denominator_and_depth() {
        let mut cfg = EngineConfig::default();
        cfg.mobility_denominator = 0.0;
        assert!(matches!(cfg.validate(), Err(UnimaxError::Config(_))));
        cfg.mobility_denominator = f64::NAN;
        assert!(cfg.validate().is_err());
        let mut cfg = EngineConfig::default();
        cfg.depth = 0;
        assert!(cfg.validate().is_err());
    }
}
