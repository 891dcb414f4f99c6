//! Cluster catalogue diagnostics
//!
//! Pairwise similarity over single-cluster seed vectors. Two clusters whose
//! seeds are nearly parallel give users a distinction without a difference,
//! so the report flags any pair above a similarity threshold for catalogue
//! review.

use crate::clusters::{all_clusters, compute_cluster_seed_vector};
use crate::error::Result;
use crate::vector::cosine_similarity;
use serde::Serialize;
use tracing::warn;

/// Default similarity above which a cluster pair is flagged
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.9;

/// Similarity of one cluster pair
#[derive(Debug, Clone, Serialize)]
pub struct ClusterPairSimilarity {
    pub first: String,
    pub second: String,
    pub similarity: f32,
}

/// Full pairwise differentiation report
#[derive(Debug, Clone, Serialize)]
pub struct DifferentiationReport {
    /// Threshold the report was built with
    pub threshold: f32,

    /// Every unordered cluster pair, most similar first
    pub pairs: Vec<ClusterPairSimilarity>,
}

impl DifferentiationReport {
    /// Pairs at or above the threshold
    pub fn flagged(&self) -> impl Iterator<Item = &ClusterPairSimilarity> {
        self.pairs.iter().filter(|p| p.similarity >= self.threshold)
    }
}

/// Compare every cluster seed against every other
pub fn differentiation_report(threshold: f32) -> Result<DifferentiationReport> {
    let clusters = all_clusters();
    let seeds: Vec<_> = clusters
        .iter()
        .map(|c| compute_cluster_seed_vector(&[c.id]).map(|seed| (c.id, seed)))
        .collect::<Result<_>>()?;

    let mut pairs = Vec::new();
    for (i, (first, a)) in seeds.iter().enumerate() {
        for (second, b) in seeds.iter().skip(i + 1) {
            let similarity = cosine_similarity(a, b, None, None);
            if similarity >= threshold {
                warn!(%first, %second, similarity, "cluster pair is weakly differentiated");
            }
            pairs.push(ClusterPairSimilarity {
                first: first.to_string(),
                second: second.to_string(),
                similarity,
            });
        }
    }
    pairs.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    Ok(DifferentiationReport { threshold, pairs })
}
