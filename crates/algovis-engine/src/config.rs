//! Engine configuration.

use serde::{Deserialize, Serialize};

use algovis_common::ValueKind;

/// Elements above which the quadratic sorts get a warning.
pub const DEFAULT_QUADRATIC_WARN_THRESHOLD: usize = 20_000;

/// Configuration for a [`crate::Workbench`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the random value source; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Value kind used when a caller does not specify one.
    pub default_kind: ValueKind,
    /// Size above which running an O(n²) sort logs a warning. This is
    /// caller-facing policy only; the engines stay correct at any size.
    pub quadratic_warn_threshold: usize,
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: None,
            default_kind: ValueKind::Int,
            quadratic_warn_threshold: DEFAULT_QUADRATIC_WARN_THRESHOLD,
        }
    }

    /// Sets the RNG seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the default value kind.
    #[must_use]
    pub fn with_default_kind(mut self, kind: ValueKind) -> Self {
        self.default_kind = kind;
        self
    }

    /// Sets the quadratic-sort warning threshold.
    #[must_use]
    pub fn with_quadratic_warn_threshold(mut self, threshold: usize) -> Self {
        self.quadratic_warn_threshold = threshold;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_seed(9)
            .with_default_kind(ValueKind::Char)
            .with_quadratic_warn_threshold(100);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.default_kind, ValueKind::Char);
        assert_eq!(config.quadratic_warn_threshold, 100);
    }
}
