//! Evaluation framework: case dataset, batch driver, and aggregated report.

pub mod case;
pub mod report;

pub use case::EvalCase;
pub use report::EvalReport;

use crate::config::EvalConfig;
use crate::error::{RankevalError, Result};
use crate::ranking::{
    average_precision, f1_at_k, hitrate_at_k, ndcg_at_k, precision_at_k, reciprocal_rank,
};

/// Run every ranking metric over a dataset and average the results.
///
/// Validates the configuration and each case before computing anything, so
/// a malformed case fails the whole run instead of skewing the means.
///
/// # Arguments
///
/// * `cases` - Evaluation cases, each pairing ground truth with predictions
/// * `config` - Threshold, window size, and F-measure weighting
///
/// # Returns
///
/// An [`EvalReport`] holding the unweighted mean of each metric, or an
/// error when the configuration is invalid, the dataset is empty, or any
/// case has mismatched vector lengths.
pub fn evaluate(cases: &[EvalCase], config: &EvalConfig) -> Result<EvalReport> {
    config.validate()?;

    if cases.is_empty() {
        return Err(RankevalError::InvalidInput(
            "no cases to evaluate".to_string(),
        ));
    }

    for case in cases {
        case.validate()?;
    }

    let start = std::time::Instant::now();

    let mut precisions = Vec::with_capacity(cases.len());
    let mut hitrates = Vec::with_capacity(cases.len());
    let mut f1s = Vec::with_capacity(cases.len());
    let mut aps = Vec::with_capacity(cases.len());
    let mut rrs = Vec::with_capacity(cases.len());
    let mut ndcgs = Vec::with_capacity(cases.len());

    for case in cases {
        let real = &case.real;
        let preds = &case.preds;
        precisions.push(precision_at_k(real, preds, config.rec_threshold, config.k));
        hitrates.push(hitrate_at_k(real, preds, config.rec_threshold, config.k));
        f1s.push(f1_at_k(
            real,
            preds,
            config.beta,
            config.rec_threshold,
            config.k,
        ));
        aps.push(average_precision(real, preds, config.rec_threshold));
        rrs.push(reciprocal_rank(real, preds, config.rec_threshold));
        ndcgs.push(ndcg_at_k(real, preds, config.k));
    }

    let duration = start.elapsed();
    log::debug!(
        "Evaluated {} cases (k={}) in {:?}",
        cases.len(),
        config.k,
        duration
    );

    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;

    Ok(EvalReport {
        cases: cases.len(),
        k: config.k,
        rec_threshold: config.rec_threshold,
        beta: config.beta,
        precision_at_k: mean(&precisions),
        hitrate_at_k: mean(&hitrates),
        f1_at_k: mean(&f1s),
        map: mean(&aps),
        mrr: mean(&rrs),
        ndcg_at_k: mean(&ndcgs),
    })
}
