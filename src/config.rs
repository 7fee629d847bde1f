use crate::error::{RankevalError, Result};
use serde::Deserialize;

/// Parameters shared by every case in an evaluation run
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    /// Value at or above which a ground-truth entry counts as relevant and
    /// a predicted score counts as recommended.
    #[serde(default = "default_rec_threshold")]
    pub rec_threshold: f64,
    /// Window size for the @K metrics.
    #[serde(default = "default_k")]
    pub k: usize,
    /// Precision/recall weighting for the F-measure. 1.0 is the plain
    /// harmonic mean.
    #[serde(default = "default_beta")]
    pub beta: f64,
}

fn default_rec_threshold() -> f64 {
    0.5
}

fn default_k() -> usize {
    5
}

fn default_beta() -> f64 {
    1.0
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            rec_threshold: default_rec_threshold(),
            k: default_k(),
            beta: default_beta(),
        }
    }
}

impl EvalConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.rec_threshold.is_finite() {
            return Err(RankevalError::Config(format!(
                "rec_threshold must be a finite number, got {}",
                self.rec_threshold
            )));
        }

        if self.k == 0 {
            return Err(RankevalError::Config(
                "k must be greater than 0".to_string(),
            ));
        }

        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(RankevalError::Config(format!(
                "beta must be a positive finite number, got {}",
                self.beta
            )));
        }

        Ok(())
    }
}
