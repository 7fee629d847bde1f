//! Ranking metrics: Precision@K, Hitrate@K (Recall@K), F1@K, Average
//! Precision, Reciprocal Rank, and NDCG@K.
//!
//! Every metric takes a ground-truth relevance vector and a predicted-score
//! vector of the same length, one entry per candidate item. The pair is
//! jointly re-ordered by descending predicted score before windowing, so
//! "top-k" always means the k highest-scored items. A value counts as
//! relevant (ground truth) or recommended (prediction) when it is greater
//! than or equal to `rec_threshold`.

use crate::ranking::order::sort_by_score_desc;
use std::cmp::Ordering;

/// Count of window positions where the item is both recommended (predicted
/// score >= threshold) and relevant (ground-truth value >= threshold).
/// Expects slices already sorted by descending score.
fn hits_in_window(real: &[f64], preds: &[f64], rec_threshold: f64, window: usize) -> usize {
    real[..window]
        .iter()
        .zip(preds[..window].iter())
        .filter(|(r, p)| **p >= rec_threshold && **r >= rec_threshold)
        .count()
}

/// Precision at K: of the top-K recommendations, the fraction that are
/// also relevant.
///
/// The pair is sorted by descending predicted score; within the first k
/// positions, `recommended` counts predicted scores >= `rec_threshold` and
/// the numerator counts positions where both the predicted score and the
/// ground-truth value clear the threshold. Returns 1.0 when nothing in the
/// window is recommended (including k = 0): no recommendations means no
/// wrong recommendations. Windows larger than the vectors are truncated.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn precision_at_k(real: &[f64], preds: &[f64], rec_threshold: f64, k: usize) -> f64 {
    let (real, preds) = sort_by_score_desc(real, preds);
    let window = k.min(preds.len());

    let recommended = preds[..window]
        .iter()
        .filter(|&&p| p >= rec_threshold)
        .count();
    if recommended == 0 {
        return 1.0;
    }

    let relevant = hits_in_window(&real, &preds, rec_threshold, window);
    relevant as f64 / recommended as f64
}

/// Hitrate at K (also known as Recall@K): of all relevant items, the
/// fraction recovered within the top-K recommendations.
///
/// The denominator counts ground-truth values >= `rec_threshold` over the
/// whole vector, not just the window; the numerator is the same
/// both-over-threshold count used by [`precision_at_k`]. Returns 1.0 when
/// the ground truth holds no relevant items at all. Windows larger than the
/// vectors are truncated.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn hitrate_at_k(real: &[f64], preds: &[f64], rec_threshold: f64, k: usize) -> f64 {
    let relevant_total = real.iter().filter(|&&r| r >= rec_threshold).count();
    if relevant_total == 0 {
        return 1.0;
    }

    let (real, preds) = sort_by_score_desc(real, preds);
    let window = k.min(preds.len());
    let relevant = hits_in_window(&real, &preds, rec_threshold, window);
    relevant as f64 / relevant_total as f64
}

/// F-measure at K: the weighted harmonic mean of [`precision_at_k`] and
/// [`hitrate_at_k`].
///
/// `beta` trades precision against recall: beta = 1.0 is the plain harmonic
/// mean (F1), beta > 1 weights recall higher, beta < 1 weights precision
/// higher. The component metrics keep their 1.0-on-empty-denominator
/// conventions. When precision and recall are both exactly zero the
/// combination is defined as 0.0 instead of NaN.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn f1_at_k(real: &[f64], preds: &[f64], beta: f64, rec_threshold: f64, k: usize) -> f64 {
    let precision = precision_at_k(real, preds, rec_threshold, k);
    let hitrate = hitrate_at_k(real, preds, rec_threshold, k);

    let b2 = beta * beta;
    let denominator = b2 * precision + hitrate;
    if denominator == 0.0 {
        return 0.0;
    }

    (1.0 + b2) * precision * hitrate / denominator
}

/// Average Precision: the mean of precision values taken at every rank
/// holding a recommended-and-relevant item, normalized by the total number
/// of relevant items.
///
/// After the descending sort, each position whose predicted score and
/// ground-truth value both clear `rec_threshold` contributes the precision
/// of the window ending at (and including) that position. The sum is
/// divided by the count of relevant ground-truth values over the whole
/// vector. Returns 0.0 when there are no relevant items.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn average_precision(real: &[f64], preds: &[f64], rec_threshold: f64) -> f64 {
    let relevant_total = real.iter().filter(|&&r| r >= rec_threshold).count();
    if relevant_total == 0 {
        return 0.0;
    }

    let (real, preds) = sort_by_score_desc(real, preds);

    let mut recommended = 0usize;
    let mut hits = 0usize;
    let mut sum = 0.0;
    for (r, p) in real.iter().zip(preds.iter()) {
        if *p >= rec_threshold {
            recommended += 1;
            if *r >= rec_threshold {
                hits += 1;
                sum += hits as f64 / recommended as f64;
            }
        }
    }

    sum / relevant_total as f64
}

/// Reciprocal Rank: 1/rank of the first relevant item in score order.
///
/// After the descending sort, finds the first position whose ground-truth
/// value is >= `rec_threshold` and returns 1/(position + 1). Returns 0.0
/// when no item is relevant.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn reciprocal_rank(real: &[f64], preds: &[f64], rec_threshold: f64) -> f64 {
    let (real, _) = sort_by_score_desc(real, preds);
    for (rank, r) in real.iter().enumerate() {
        if *r >= rec_threshold {
            return 1.0 / (rank + 1) as f64;
        }
    }
    0.0
}

/// Normalized Discounted Cumulative Gain at K.
///
/// Graded formulation: the gain of each position is its raw ground-truth
/// value (assumed non-negative), discounted by log2 of the position. The
/// ideal ordering sorts the ground truth itself descending. Returns
/// `dcg / ideal_dcg`, or 0.0 when the ideal is zero (no gain anywhere).
/// Windows larger than the vectors are truncated.
///
/// # Panics
///
/// Panics if the slices have different lengths
pub fn ndcg_at_k(real: &[f64], preds: &[f64], k: usize) -> f64 {
    let (ranked_gains, _) = sort_by_score_desc(real, preds);
    let window = k.min(ranked_gains.len());
    let actual = dcg(&ranked_gains[..window]);

    let mut ideal_gains = real.to_vec();
    ideal_gains.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    let ideal = dcg(&ideal_gains[..window]);

    if ideal == 0.0 {
        return 0.0;
    }
    actual / ideal
}

/// Discounted cumulative gain: position i contributes gain / log2(i + 2).
fn dcg(gains: &[f64]) -> f64 {
    gains
        .iter()
        .enumerate()
        .map(|(i, g)| g / (i as f64 + 2.0).log2())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rating-style fixture: six items, three relevant at threshold 3.5;
    // the top-3 by score recover two of them.
    const REAL: [f64; 6] = [4.0, 2.0, 3.0, 5.0, 2.0, 4.0];
    const PREDS: [f64; 6] = [2.3, 3.6, 3.4, 4.5, 4.9, 4.3];

    #[test]
    fn test_precision_at_k_rating_fixture() {
        let p = precision_at_k(&REAL, &PREDS, 3.5, 3);
        assert!(
            (p - 2.0 / 3.0).abs() < 1e-6,
            "Top-3 holds 3 recommended, 2 relevant: expected 2/3, got {}",
            p
        );
    }

    #[test]
    fn test_hitrate_at_k_rating_fixture() {
        let h = hitrate_at_k(&REAL, &PREDS, 3.5, 3);
        assert!(
            (h - 2.0 / 3.0).abs() < 1e-6,
            "2 of 3 relevant items recovered in top-3: expected 2/3, got {}",
            h
        );
    }

    #[test]
    fn test_f1_at_k_rating_fixture() {
        let f = f1_at_k(&REAL, &PREDS, 1.0, 3.5, 3);
        assert!(
            (f - 2.0 / 3.0).abs() < 1e-6,
            "Precision equals recall here, so F1 equals both: got {}",
            f
        );
    }

    #[test]
    fn test_precision_at_k_zero_k() {
        assert_eq!(
            precision_at_k(&REAL, &PREDS, 3.5, 0),
            1.0,
            "Empty window has no recommendations, vacuously precise"
        );
    }

    #[test]
    fn test_precision_at_k_nothing_recommended() {
        let real = vec![5.0, 4.0, 1.0];
        let preds = vec![0.1, 0.2, 0.3];
        assert_eq!(
            precision_at_k(&real, &preds, 0.5, 3),
            1.0,
            "All scores below threshold means zero recommendations"
        );
    }

    #[test]
    fn test_precision_at_k_window_truncates() {
        let p3 = precision_at_k(&REAL, &PREDS, 3.5, 6);
        let p_large = precision_at_k(&REAL, &PREDS, 3.5, 100);
        assert_eq!(p3, p_large, "k beyond the vector length clamps to length");
    }

    #[test]
    fn test_precision_at_k_tied_scores_keep_input_order() {
        let real = vec![0.0, 5.0];
        let preds = vec![1.0, 1.0];
        // Stable sort keeps the irrelevant item first, so the top-1 window
        // holds one recommendation and zero hits.
        assert_eq!(precision_at_k(&real, &preds, 0.5, 1), 0.0);
    }

    #[test]
    fn test_hitrate_at_k_no_relevant_items() {
        let real = vec![0.0, 0.1, 0.2];
        let preds = vec![0.9, 0.8, 0.7];
        assert_eq!(
            hitrate_at_k(&real, &preds, 0.5, 2),
            1.0,
            "No relevant items to find, vacuously recalled"
        );
    }

    #[test]
    fn test_hitrate_at_k_zero_k_misses_everything() {
        assert_eq!(
            hitrate_at_k(&REAL, &PREDS, 3.5, 0),
            0.0,
            "Relevant items exist but the empty window recovers none"
        );
    }

    #[test]
    fn test_hitrate_at_k_full_window_recovers_all_recommended() {
        // Every item is both predicted and rated above threshold
        let real = vec![4.0, 5.0, 4.5];
        let preds = vec![4.2, 4.8, 3.9];
        assert!((hitrate_at_k(&real, &preds, 3.5, 3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_f1_at_k_double_vacuous_is_one() {
        // Nothing recommended, nothing relevant: both components are 1.0
        let real = vec![0.0, 0.0];
        let preds = vec![0.0, 0.0];
        assert!((f1_at_k(&real, &preds, 1.0, 0.5, 2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_f1_at_k_zero_overlap_is_zero() {
        // Recommendations and relevant items exist but never coincide
        let real = vec![0.0, 0.0, 5.0];
        let preds = vec![5.0, 4.0, 0.0];
        assert_eq!(
            f1_at_k(&real, &preds, 1.0, 1.0, 2),
            0.0,
            "Precision and recall both zero is defined as 0.0, not NaN"
        );
    }

    #[test]
    fn test_f1_at_k_beta_weights_recall() {
        // precision 2/3, recall 2/6: scores strictly decreasing so the
        // window is the first three items as given.
        let real = vec![1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0];
        let preds = vec![9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0];
        let f2 = f1_at_k(&real, &preds, 2.0, 0.5, 3);
        // (1 + 4) * (2/3) * (1/3) / (4 * 2/3 + 1/3) = 10/27
        assert!(
            (f2 - 10.0 / 27.0).abs() < 1e-9,
            "F2 should weight recall: got {}",
            f2
        );
    }

    #[test]
    fn test_average_precision_rating_fixture() {
        let ap = average_precision(&REAL, &PREDS, 3.5);
        // Hits at sorted ranks 2 and 3: (1/2 + 2/3) / 3 relevant = 7/18
        assert!(
            (ap - 7.0 / 18.0).abs() < 1e-9,
            "Expected 7/18, got {}",
            ap
        );
    }

    #[test]
    fn test_average_precision_perfect_ranking() {
        let real = vec![1.0, 1.0, 0.0, 0.0];
        let preds = vec![0.9, 0.8, 0.2, 0.1];
        assert!(
            (average_precision(&real, &preds, 0.5) - 1.0).abs() < 1e-9,
            "All relevant items ranked first and nothing else recommended"
        );
    }

    #[test]
    fn test_average_precision_inverted_ranking() {
        let real = vec![0.0, 0.0, 1.0, 1.0];
        let preds = vec![0.9, 0.8, 0.7, 0.6];
        let ap = average_precision(&real, &preds, 0.5);
        // Hits at ranks 3 and 4: (1/3 + 2/4) / 2 = 5/12
        assert!((ap - 5.0 / 12.0).abs() < 1e-9, "Expected 5/12, got {}", ap);
    }

    #[test]
    fn test_average_precision_orders_rankings() {
        let real = vec![1.0, 1.0, 0.0, 0.0];
        let good = vec![0.9, 0.8, 0.2, 0.1];
        let bad = vec![0.1, 0.2, 0.8, 0.9];
        assert!(
            average_precision(&real, &good, 0.5) > average_precision(&real, &bad, 0.5),
            "A correct ranking must score above an inverted one"
        );
    }

    #[test]
    fn test_average_precision_no_relevant_items() {
        let real = vec![0.0, 0.0];
        let preds = vec![0.9, 0.8];
        assert_eq!(average_precision(&real, &preds, 0.5), 0.0);
    }

    #[test]
    fn test_reciprocal_rank_first_position() {
        let real = vec![0.0, 5.0, 0.0];
        let preds = vec![0.1, 0.9, 0.5];
        // Highest score carries the relevant item
        assert!((reciprocal_rank(&real, &preds, 3.5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reciprocal_rank_second_position() {
        let rr = reciprocal_rank(&REAL, &PREDS, 3.5);
        // Sorted ground truth is [2, 5, 4, 2, 3, 4]; first relevant at rank 2
        assert!((rr - 0.5).abs() < 1e-9, "Expected 1/2, got {}", rr);
    }

    #[test]
    fn test_reciprocal_rank_none_relevant() {
        let real = vec![1.0, 2.0];
        let preds = vec![0.9, 0.8];
        assert_eq!(reciprocal_rank(&real, &preds, 3.5), 0.0);
    }

    #[test]
    fn test_ndcg_at_k_perfect_ranking() {
        let real = vec![3.0, 2.0, 1.0, 0.0];
        let preds = vec![0.9, 0.8, 0.7, 0.6];
        assert!(
            (ndcg_at_k(&real, &preds, 4) - 1.0).abs() < 1e-9,
            "Score order already matches relevance order"
        );
    }

    #[test]
    fn test_ndcg_at_k_rating_fixture() {
        let n = ndcg_at_k(&REAL, &PREDS, 3);
        // Ranked gains [2, 5, 4]; ideal gains [5, 4, 4]
        let expected = (2.0 + 5.0 / 3.0_f64.log2() + 4.0 / 2.0)
            / (5.0 + 4.0 / 3.0_f64.log2() + 4.0 / 2.0);
        assert!((n - expected).abs() < 1e-9, "Expected {}, got {}", expected, n);
    }

    #[test]
    fn test_ndcg_at_k_reversed_is_degraded() {
        let real = vec![0.0, 1.0, 2.0, 3.0];
        let preds = vec![0.9, 0.8, 0.7, 0.6];
        let n = ndcg_at_k(&real, &preds, 4);
        assert!(n > 0.0 && n < 1.0, "Inverted ranking should land in (0, 1): {}", n);
    }

    #[test]
    fn test_ndcg_at_k_all_zero_gains() {
        let real = vec![0.0, 0.0, 0.0];
        let preds = vec![0.9, 0.8, 0.7];
        assert_eq!(ndcg_at_k(&real, &preds, 3), 0.0);
    }
}
