use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs for the prediction service wrapped around the estimator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Artificial delay before each estimate, in milliseconds.
    pub latency_ms: u64,
    /// Upper bound on a single prediction, in milliseconds.
    pub timeout_ms: u64,
}

impl PredictionConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            timeout_ms: 10_000,
        }
    }
}
