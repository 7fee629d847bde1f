//! Joint re-ordering of a (ground truth, predicted score) pair by score.

use std::cmp::Ordering;

/// Sort a ranking pair by descending predicted score.
///
/// Builds one stable index permutation over `preds` (highest score first,
/// ties keep their original relative order) and gathers both slices through
/// it, so every ground-truth value stays paired with the score that produced
/// it even when scores tie.
///
/// Returns the re-ordered `(real, preds)` pair as owned vectors.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn sort_by_score_desc(real: &[f64], preds: &[f64]) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        real.len(),
        preds.len(),
        "Ranking pair must have same length to sort by score"
    );

    let mut order: Vec<usize> = (0..preds.len()).collect();
    order.sort_by(|&a, &b| preds[b].partial_cmp(&preds[a]).unwrap_or(Ordering::Equal));

    let sorted_real = order.iter().map(|&i| real[i]).collect();
    let sorted_preds = order.iter().map(|&i| preds[i]).collect();
    (sorted_real, sorted_preds)
}
