//! Taste-cluster catalogue and seed builder
//!
//! Hand-authored archetype vectors, averaged into a user's starting vector
//! from their coarse onboarding selections. The catalogue is data, not
//! logic: curation never touches the averaging code below it.

use crate::error::{Result, TasteError};
use crate::vector::{Dimension, GenreDim, MetaDim, SparseVec, TasteVector};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Named taste archetype with a partially-specified vector
///
/// Dimensions a cluster leaves unset contribute nothing to a seed average;
/// they are excluded from that dimension's average, not treated as zero.
#[derive(Debug, Clone)]
pub struct TasteCluster {
    /// Stable identifier used by onboarding selections
    pub id: &'static str,

    /// Display label
    pub label: &'static str,

    /// One-line description shown during onboarding
    pub blurb: &'static str,

    /// Partial archetype vector
    pub vector: SparseVec,
}

/// Static cluster catalogue, read-only at runtime
pub static CLUSTERS: Lazy<Vec<TasteCluster>> = Lazy::new(|| {
    use GenreDim::*;
    use MetaDim::*;

    vec![
        TasteCluster {
            id: "action-adrenaline",
            label: "Adrenaline Junkie",
            blurb: "Car chases, explosions, heroes on the edge",
            vector: SparseVec::new()
                .genre(Action, 0.9)
                .genre(Thriller, 0.7)
                .genre(Adventure, 0.6)
                .genre(Scifi, 0.4)
                .meta(Tone, -0.4)
                .meta(Pacing, 0.7)
                .meta(Popularity, 0.3)
                .meta(Intensity, 0.7),
        },
        TasteCluster {
            id: "cozy-comfort",
            label: "Cozy Comfort",
            blurb: "Warm stories to unwind with",
            vector: SparseVec::new()
                .genre(Comedy, 0.7)
                .genre(Family, 0.7)
                .genre(Romance, 0.5)
                .genre(Animation, 0.4)
                .meta(Tone, 0.7)
                .meta(Pacing, -0.3)
                .meta(Intensity, -0.6),
        },
        TasteCluster {
            id: "arthouse-contemplative",
            label: "Arthouse Contemplative",
            blurb: "Slow cinema, festival darlings, lingering shots",
            vector: SparseVec::new()
                .genre(Drama, 0.9)
                .genre(Romance, 0.4)
                .genre(History, 0.4)
                .meta(Tone, -0.2)
                .meta(Pacing, -0.8)
                .meta(Era, -0.3)
                .meta(Popularity, -0.7),
        },
        TasteCluster {
            id: "horror-midnight",
            label: "Midnight Horror",
            blurb: "Lights off, volume up, no sleep tonight",
            vector: SparseVec::new()
                .genre(Horror, 0.9)
                .genre(Mystery, 0.6)
                .genre(Thriller, 0.6)
                .meta(Tone, -0.8)
                .meta(Intensity, 0.8),
        },
        TasteCluster {
            id: "laugh-riot",
            label: "Laugh Riot",
            blurb: "Comedies first, everything else second",
            vector: SparseVec::new()
                .genre(Comedy, 0.9)
                .genre(Romance, 0.4)
                .genre(Animation, 0.3)
                .meta(Tone, 0.8)
                .meta(Pacing, 0.3)
                .meta(Intensity, -0.4),
        },
        TasteCluster {
            id: "epic-worlds",
            label: "Epic Worlds",
            blurb: "Sprawling fantasy and science fiction sagas",
            vector: SparseVec::new()
                .genre(Fantasy, 0.9)
                .genre(Scifi, 0.7)
                .genre(Adventure, 0.7)
                .genre(Action, 0.4)
                .meta(Pacing, 0.3)
                .meta(Popularity, 0.4)
                .meta(Intensity, 0.4),
        },
        TasteCluster {
            id: "true-story",
            label: "True Story",
            blurb: "Documentaries and history, the stranger-than-fiction shelf",
            vector: SparseVec::new()
                .genre(Documentary, 0.9)
                .genre(History, 0.7)
                .genre(Crime, 0.4)
                .meta(Tone, -0.3)
                .meta(Pacing, -0.4)
                .meta(Popularity, -0.3),
        },
        TasteCluster {
            id: "hopeless-romantic",
            label: "Hopeless Romantic",
            blurb: "Meet-cutes, slow burns, grand gestures",
            vector: SparseVec::new()
                .genre(Romance, 0.9)
                .genre(Drama, 0.6)
                .genre(Comedy, 0.5)
                .meta(Tone, 0.5)
                .meta(Era, -0.2)
                .meta(Intensity, -0.3),
        },
        TasteCluster {
            id: "future-shock",
            label: "Future Shock",
            blurb: "Hard science fiction and speculative futures",
            vector: SparseVec::new()
                .genre(Scifi, 0.9)
                .genre(Thriller, 0.5)
                .genre(Mystery, 0.4)
                .meta(Tone, -0.4)
                .meta(Era, 0.6)
                .meta(Popularity, -0.2)
                .meta(Intensity, 0.4),
        },
        TasteCluster {
            id: "animated-everyone",
            label: "Animation for Everyone",
            blurb: "Animated features the whole couch agrees on",
            vector: SparseVec::new()
                .genre(Animation, 0.9)
                .genre(Family, 0.8)
                .genre(Anime, 0.4)
                .genre(Musical, 0.4)
                .meta(Tone, 0.7)
                .meta(Popularity, 0.5)
                .meta(Intensity, -0.5),
        },
        TasteCluster {
            id: "noir-underbelly",
            label: "Noir Underbelly",
            blurb: "Crime sagas, heists, morally gray detectives",
            vector: SparseVec::new()
                .genre(Crime, 0.9)
                .genre(Thriller, 0.7)
                .genre(Mystery, 0.6)
                .genre(Drama, 0.5)
                .meta(Tone, -0.7)
                .meta(Era, -0.3)
                .meta(Intensity, 0.5),
        },
        TasteCluster {
            id: "underdog-arena",
            label: "Underdog Arena",
            blurb: "Sports stories and against-the-odds triumphs",
            vector: SparseVec::new()
                .genre(Sport, 0.9)
                .genre(Drama, 0.6)
                .genre(Documentary, 0.3)
                .meta(Tone, 0.4)
                .meta(Pacing, 0.4)
                .meta(Popularity, 0.3)
                .meta(Intensity, 0.3),
        },
    ]
});

/// Look up a cluster by id
pub fn cluster_by_id(id: &str) -> Option<&'static TasteCluster> {
    CLUSTERS.iter().find(|c| c.id == id)
}

/// All clusters in catalogue order
pub fn all_clusters() -> &'static [TasteCluster] {
    &CLUSTERS
}

/// Average the selected archetype vectors into a starting taste vector
///
/// Per dimension, the average runs over the clusters that define that
/// dimension; non-defining clusters are excluded from the average, not
/// zero-counted. Deterministic and order-independent; duplicate ids collapse
/// to a single contribution. Zero clusters selected yields the zero vector.
/// An unknown cluster id is a hard error: silently dropping it would seed
/// the profile from the wrong archetypes.
pub fn compute_cluster_seed_vector<S: AsRef<str>>(cluster_ids: &[S]) -> Result<TasteVector> {
    // BTreeSet both dedups and makes iteration order independent of input order.
    let mut unique: BTreeSet<&str> = BTreeSet::new();
    for id in cluster_ids {
        unique.insert(id.as_ref());
    }

    let mut selected = Vec::with_capacity(unique.len());
    for id in unique {
        let cluster =
            cluster_by_id(id).ok_or_else(|| TasteError::UnknownCluster(id.to_string()))?;
        selected.push(cluster);
    }

    let mut seed = TasteVector::zero();
    if selected.is_empty() {
        return Ok(seed);
    }

    for dim in Dimension::all() {
        let mut sum = 0.0_f32;
        let mut count = 0u32;
        for cluster in &selected {
            if let Some(value) = cluster.vector.get(dim) {
                sum += value;
                count += 1;
            }
        }
        if count > 0 {
            seed.set(dim, sum / count as f32);
        }
    }

    seed.clamp();
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for cluster in all_clusters() {
            assert!(seen.insert(cluster.id), "duplicate cluster id: {}", cluster.id);
            assert!(!cluster.vector.is_empty(), "empty cluster vector: {}", cluster.id);
        }
    }

    #[test]
    fn test_catalogue_values_in_bounds() {
        for cluster in all_clusters() {
            for (dim, value) in cluster.vector.iter() {
                let (min, max) = dim.bounds();
                assert!(
                    value >= min && value <= max,
                    "{} {} out of bounds: {}",
                    cluster.id,
                    dim,
                    value
                );
            }
        }
    }

    #[test]
    fn test_single_cluster_seed_is_archetype() {
        let seed = compute_cluster_seed_vector(&["action-adrenaline"]).unwrap();
        assert!((seed.genre(GenreDim::Action) - 0.9).abs() < 1e-6);
        assert!((seed.meta(MetaDim::Tone) + 0.4).abs() < 1e-6);
        assert!((seed.meta(MetaDim::Intensity) - 0.7).abs() < 1e-6);
        // Undefined dimensions stay zero.
        assert_eq!(seed.genre(GenreDim::Romance), 0.0);
        assert_eq!(seed.meta(MetaDim::Era), 0.0);
    }

    #[test]
    fn test_partial_dimensions_average_over_definers_only() {
        // Tone: action-adrenaline -0.4, horror-midnight -0.8 -> -0.6.
        // Pacing: only action-adrenaline defines it -> 0.7, not 0.35.
        let seed = compute_cluster_seed_vector(&["action-adrenaline", "horror-midnight"]).unwrap();
        assert!((seed.meta(MetaDim::Tone) + 0.6).abs() < 1e-6);
        assert!((seed.meta(MetaDim::Pacing) - 0.7).abs() < 1e-6);
        // Thriller defined by both: (0.7 + 0.6) / 2.
        assert!((seed.genre(GenreDim::Thriller) - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_seed_is_order_independent_and_dedups() {
        let a = compute_cluster_seed_vector(&["cozy-comfort", "laugh-riot"]).unwrap();
        let b = compute_cluster_seed_vector(&["laugh-riot", "cozy-comfort"]).unwrap();
        assert_eq!(a, b);

        let deduped =
            compute_cluster_seed_vector(&["laugh-riot", "cozy-comfort", "laugh-riot"]).unwrap();
        assert_eq!(a, deduped);
    }

    #[test]
    fn test_empty_selection_is_zero_vector() {
        let seed = compute_cluster_seed_vector::<&str>(&[]).unwrap();
        assert_eq!(seed, TasteVector::zero());
    }

    #[test]
    fn test_unknown_cluster_fails_fast() {
        let err = compute_cluster_seed_vector(&["action-adrenaline", "vibes-only"]).unwrap_err();
        assert!(matches!(err, TasteError::UnknownCluster(id) if id == "vibes-only"));
    }
}
