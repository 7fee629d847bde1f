//! Aggregated evaluation results and report formatting.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Mean metrics over an evaluation dataset.
///
/// Every metric field is the unweighted mean of the per-case value, so
/// each case counts equally regardless of how many items it ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Number of cases aggregated.
    pub cases: usize,
    /// Window size the @K metrics were computed with.
    pub k: usize,
    /// Relevance/recommendation threshold used throughout.
    pub rec_threshold: f64,
    /// F-measure weighting used for `f1_at_k`.
    pub beta: f64,
    /// Mean Precision@K.
    pub precision_at_k: f64,
    /// Mean Hitrate@K (Recall@K).
    pub hitrate_at_k: f64,
    /// Mean F-measure@K.
    pub f1_at_k: f64,
    /// Mean Average Precision.
    pub map: f64,
    /// Mean Reciprocal Rank.
    pub mrr: f64,
    /// Mean NDCG@K.
    pub ndcg_at_k: f64,
}

impl EvalReport {
    /// Generate a formatted, human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Ranking evaluation (cases={}, k={}, rec_threshold={})\n\
             Precision@{k}: {:>8.4}\n\
             Hitrate@{k}:   {:>8.4}\n\
             F1@{k}:        {:>8.4}\n\
             MAP:         {:>8.4}\n\
             MRR:         {:>8.4}\n\
             NDCG@{k}:      {:>8.4}",
            self.cases,
            self.k,
            self.rec_threshold,
            self.precision_at_k,
            self.hitrate_at_k,
            self.f1_at_k,
            self.map,
            self.mrr,
            self.ndcg_at_k,
            k = self.k,
        )
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
