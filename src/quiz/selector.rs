//! Pair selection: genre coverage and ambiguity targeting
//!
//! Two independent procedures fill the quiz's non-fixed phases:
//!
//! - *Genre-responsive* selection scores candidates by how many of the
//!   user's strongest genres they trigger, weighting genres the fixed set
//!   leaves uncovered twice as heavily, plus a flat bonus when a trigger
//!   cluster matches the user's onboarding selection.
//! - *Adaptive* selection ranks dimensions by ambiguity of the interim
//!   vector and scores candidates by how many ambiguous dimensions they
//!   test, with small bonuses for breadth and for option separation on
//!   those dimensions.
//!
//! Both run the same greedy three-tier fallback: an overlap-safe pass (no
//! shared content identity with anything already asked), then a pass with
//! the overlap constraint relaxed, then a final pass with the external
//! pair-id exclusion relaxed. Under-supply degrades to a shorter quiz,
//! never an error.

use crate::config::EngineConfig;
use crate::quiz::catalog::{self, QuizPair};
use crate::quiz::QuizPhase;
use crate::vector::{Dimension, GenreDim, TasteVector};
use std::collections::HashSet;
use tracing::debug;

/// Select genre-responsive pairs for the user's strongest genres
///
/// `top_genres` comes from the seed vector (see
/// [`TasteVector::top_genres`]); `exclude_pair_ids` are pairs already asked;
/// `cluster_ids` are the user's onboarding selections, used for the
/// trigger-cluster bonus.
pub fn select_genre_responsive_pairs(
    config: &EngineConfig,
    top_genres: &[GenreDim],
    exclude_pair_ids: &HashSet<String>,
    cluster_ids: Option<&[String]>,
) -> Vec<QuizPair> {
    let sel = &config.selection;
    let covered = catalog::fixed_genre_coverage();
    let uncovered: HashSet<GenreDim> = top_genres
        .iter()
        .copied()
        .filter(|g| !covered.contains(g))
        .collect();
    let covered_top: HashSet<GenreDim> = top_genres
        .iter()
        .copied()
        .filter(|g| covered.contains(g))
        .collect();

    let mut scored: Vec<(f32, &'static QuizPair)> = catalog::pairs_for_phase(QuizPhase::GenreResponsive)
        .into_iter()
        .map(|p| {
            let uncovered_hits = p.trigger_genres.iter().filter(|g| uncovered.contains(g)).count();
            let covered_hits = p.trigger_genres.iter().filter(|g| covered_top.contains(g)).count();
            let mut score = sel.uncovered_genre_score * uncovered_hits as f32
                + sel.covered_genre_score * covered_hits as f32;
            if let Some(ids) = cluster_ids {
                if p.trigger_clusters.iter().any(|c| ids.iter().any(|id| id == c)) {
                    score += sel.trigger_cluster_bonus;
                }
            }
            (score, p)
        })
        .collect();
    sort_by_score(&mut scored);

    // Fixed-set content identities seed the overlap constraint.
    let overlap: HashSet<&'static str> = catalog::fixed_pairs()
        .iter()
        .flat_map(|p| p.content_ids())
        .collect();

    let selected = greedy_select(&scored, sel.genre_responsive_quota, exclude_pair_ids, overlap);
    debug!(
        quota = sel.genre_responsive_quota,
        selected = selected.len(),
        "genre-responsive selection"
    );
    selected
}

/// Select adaptive pairs targeting the interim vector's most ambiguous
/// dimensions
///
/// `used_pair_ids` are pairs asked in any earlier phase; their content
/// identities seed the overlap constraint.
pub fn select_adaptive_pairs(
    config: &EngineConfig,
    interim: &TasteVector,
    used_pair_ids: &HashSet<String>,
    count: usize,
) -> Vec<QuizPair> {
    let sel = &config.selection;
    let targets = ambiguous_dimensions(config, interim);
    debug!(?targets, "adaptive ambiguity targets");

    let target_set: HashSet<Dimension> = targets.iter().copied().collect();
    let mut scored: Vec<(f32, &'static QuizPair)> = catalog::pairs_for_phase(QuizPhase::Adaptive)
        .into_iter()
        .map(|p| {
            let matched: Vec<Dimension> = p
                .dimensions_tested
                .iter()
                .copied()
                .filter(|d| target_set.contains(d))
                .collect();
            let separation: f32 = matched.iter().map(|d| p.separation(*d)).sum();
            let score = sel.ambiguous_match_score * matched.len() as f32
                + sel.breadth_bonus * p.dimensions_tested.len() as f32
                + sel.separation_reward * separation;
            (score, p)
        })
        .collect();
    sort_by_score(&mut scored);

    let overlap: HashSet<&'static str> = used_pair_ids
        .iter()
        .filter_map(|id| catalog::pair_by_id(id))
        .flat_map(|p| p.content_ids())
        .collect();

    let selected = greedy_select(&scored, count, used_pair_ids, overlap);
    debug!(quota = count, selected = selected.len(), "adaptive selection");
    selected
}

/// Rank dimensions by ambiguity and build the adaptive target set: the
/// top-K base always qualifies, plus any dimension whose ambiguity exceeds
/// the threshold, capped at the configured maximum
///
/// This lets the question count adapt to how unresolved the profile is, not
/// just a fixed top-K.
pub fn ambiguous_dimensions(config: &EngineConfig, interim: &TasteVector) -> Vec<Dimension> {
    let sel = &config.selection;
    let mut ranked: Vec<(Dimension, f32)> = Dimension::all()
        .map(|d| (d, interim.ambiguity(d)))
        .collect();
    // Descending by ambiguity; canonical order breaks ties for determinism.
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .enumerate()
        .filter(|(i, (_, amb))| *i < sel.adaptive_base_dims || *amb > sel.ambiguity_threshold)
        .take(sel.max_target_dims)
        .map(|(_, (d, _))| d)
        .collect()
}

/// Descending score, ties broken by pair id for determinism
fn sort_by_score(scored: &mut [(f32, &'static QuizPair)]) {
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.1.id.cmp(b.1.id))
    });
}

/// Greedy selection under the three-tier fallback policy
///
/// Tier 1 respects both the content-overlap constraint and the external
/// pair-id exclusion. Tier 2 relaxes overlap. Tier 3 relaxes the external
/// exclusion. Within-call duplicates are never returned.
fn greedy_select(
    ranked: &[(f32, &'static QuizPair)],
    quota: usize,
    exclude_pair_ids: &HashSet<String>,
    mut overlap: HashSet<&'static str>,
) -> Vec<QuizPair> {
    let mut selected: Vec<QuizPair> = Vec::with_capacity(quota);
    let mut chosen_ids: HashSet<&'static str> = HashSet::new();

    // Tier 1: overlap-safe.
    for (_, p) in ranked {
        if selected.len() >= quota {
            break;
        }
        if exclude_pair_ids.contains(p.id) || chosen_ids.contains(p.id) {
            continue;
        }
        if p.content_ids().iter().any(|c| overlap.contains(c)) {
            continue;
        }
        chosen_ids.insert(p.id);
        overlap.extend(p.content_ids());
        selected.push((*p).clone());
    }

    // Tier 2: relax the overlap constraint.
    if selected.len() < quota {
        debug!("selection quota unmet, relaxing overlap constraint");
        for (_, p) in ranked {
            if selected.len() >= quota {
                break;
            }
            if exclude_pair_ids.contains(p.id) || chosen_ids.contains(p.id) {
                continue;
            }
            chosen_ids.insert(p.id);
            selected.push((*p).clone());
        }
    }

    // Tier 3: relax the external pair-id exclusion.
    if selected.len() < quota {
        debug!("selection quota still unmet, relaxing pair-id exclusion");
        for (_, p) in ranked {
            if selected.len() >= quota {
                break;
            }
            if chosen_ids.contains(p.id) {
                continue;
            }
            chosen_ids.insert(p.id);
            selected.push((*p).clone());
        }
    }

    selected
}
