//! Ranking quality: joint score ordering and windowed metrics (P@K, Hitrate@K, F1@K, AP, RR, NDCG).

pub mod metrics;
pub mod order;

pub use metrics::{
    average_precision, f1_at_k, hitrate_at_k, ndcg_at_k, precision_at_k, reciprocal_rank,
};
pub use order::sort_by_score_desc;
