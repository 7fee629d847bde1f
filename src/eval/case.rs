//! Eval case type and input validation for the evaluation framework.

use crate::error::{RankevalError, Result};
use serde::Deserialize;

/// Single evaluation case: one query's ground truth and predicted scores.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalCase {
    /// Optional identifier for reporting (e.g. a query or user id).
    #[serde(default)]
    pub id: Option<String>,
    /// Ground-truth relevance values, one per candidate item.
    pub real: Vec<f64>,
    /// Predicted scores, aligned with `real` by index.
    pub preds: Vec<f64>,
}

impl EvalCase {
    /// Checks that the ground truth and the predictions describe the same
    /// number of items. Metrics panic on mismatched slices, so batch
    /// evaluation surfaces the problem as an error up front instead.
    pub fn validate(&self) -> Result<()> {
        if self.real.len() != self.preds.len() {
            return Err(RankevalError::InvalidInput(format!(
                "case {} has {} ground-truth values but {} predictions",
                self.label(),
                self.real.len(),
                self.preds.len()
            )));
        }
        Ok(())
    }

    /// Identifier used in log and error messages.
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<unnamed>")
    }
}
