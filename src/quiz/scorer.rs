//! Answer scoring: deltas, phase weighting, cap-aware scaling, confidence
//!
//! Converts a sequence of (pair, choice) answers into per-question vector
//! deltas and accumulates them into a running vector. Meta dimensions get
//! cap-aware scaling: deltas applied near a bound are progressively damped
//! so the value approaches the bound asymptotically instead of overshooting
//! into a hard clamp that would discard how strongly the user was pushing.
//! Genre dimensions accumulate raw and rely on the pass-end clamp; their
//! saturation at a known "definitely / definitely not" extreme is
//! acceptable.

use crate::config::{EngineConfig, ScoringConfig};
use crate::error::{Result, TasteError};
use crate::quiz::catalog::QuizPair;
use crate::quiz::{Choice, QuizAnswer, QuizPhase};
use crate::vector::{ConfidenceVector, Dimension, TasteVector};
use std::collections::HashMap;
use tracing::trace;

/// Phase weight for one answer
fn phase_weight(config: &ScoringConfig, phase: QuizPhase) -> f32 {
    match phase {
        QuizPhase::Fixed => config.fixed_phase_weight,
        QuizPhase::GenreResponsive => config.genre_responsive_phase_weight,
        QuizPhase::Adaptive => config.adaptive_phase_weight,
    }
}

/// Raw delta for one answer over the pair's tested dimensions, before phase
/// weighting and cap scaling
///
/// - `Skip`: zero delta.
/// - `Both`: affirms both options without net direction.
/// - `Neither`: subtracts a fixed penalty per positively-valued option on
///   each tested *genre* dimension; meta dimensions are untouched (a
///   pairwise rejection has no principled direction on a bipolar axis).
/// - `A`/`B`: the option-value difference times the choice gain; negative
///   results are damped so a dislike corrects softer than a like
///   reinforces.
pub(crate) fn answer_delta(
    config: &ScoringConfig,
    pair: &QuizPair,
    choice: Choice,
) -> Vec<(Dimension, f32)> {
    let mut deltas = Vec::with_capacity(pair.dimensions_tested.len());
    match choice {
        Choice::Skip => {}
        Choice::Both => {
            for &dim in &pair.dimensions_tested {
                let a = pair.option_a.vector.value_or_zero(dim);
                let b = pair.option_b.vector.value_or_zero(dim);
                deltas.push((dim, config.choice_gain * a + config.choice_gain * b));
            }
        }
        Choice::Neither => {
            for &dim in &pair.dimensions_tested {
                if dim.is_meta() {
                    continue;
                }
                let mut penalty = 0.0;
                if pair.option_a.vector.value_or_zero(dim) > 0.0 {
                    penalty -= config.neither_penalty;
                }
                if pair.option_b.vector.value_or_zero(dim) > 0.0 {
                    penalty -= config.neither_penalty;
                }
                if penalty != 0.0 {
                    deltas.push((dim, penalty));
                }
            }
        }
        Choice::A | Choice::B => {
            for &dim in &pair.dimensions_tested {
                let a = pair.option_a.vector.value_or_zero(dim);
                let b = pair.option_b.vector.value_or_zero(dim);
                let (chosen, unchosen) = if choice == Choice::A { (a, b) } else { (b, a) };
                let mut delta = (chosen - unchosen) * config.choice_gain;
                if delta < 0.0 {
                    delta *= config.negative_damping;
                }
                if delta != 0.0 {
                    deltas.push((dim, delta));
                }
            }
        }
    }
    deltas
}

/// Cap-aware scale factor for a meta delta against the running value
///
/// Headroom is the distance to the bound in the delta's direction. The
/// scale is `min(1, headroom / threshold, headroom / |delta|)`: far from a
/// bound deltas pass through unchanged; near a bound they are damped in
/// proportion to the remaining room and can never overshoot.
fn cap_scale(config: &ScoringConfig, current: f32, delta: f32) -> f32 {
    if delta == 0.0 {
        return 1.0;
    }
    let headroom = if delta > 0.0 { 1.0 - current } else { current + 1.0 };
    if headroom <= 0.0 {
        return 0.0;
    }
    (headroom / config.cap_threshold)
        .min(headroom / delta.abs())
        .min(1.0)
}

/// Apply one answer's weighted deltas to the running vector
fn apply_answer(
    config: &ScoringConfig,
    vector: &mut TasteVector,
    pair: &QuizPair,
    answer: &QuizAnswer,
) {
    let weight = phase_weight(config, answer.phase);
    for (dim, raw) in answer_delta(config, pair, answer.choice) {
        let weighted = raw * weight;
        let applied = if dim.is_meta() {
            weighted * cap_scale(config, vector.get(dim), weighted)
        } else {
            weighted
        };
        trace!(%dim, raw, weighted, applied, "quiz delta");
        vector.add(dim, applied);
    }
}

fn index_pairs(pairs: &[QuizPair]) -> HashMap<&str, &QuizPair> {
    pairs.iter().map(|p| (p.id, p)).collect()
}

/// Replay a quiz answer log against the supplied pair list, accumulating
/// from `base`
///
/// Deterministic: identical inputs yield bit-identical output. An answer
/// referencing a pair id not in `pairs` is a hard error. The accumulated
/// vector is clamped at the end of the pass as a final safety net.
pub fn compute_quiz_vector(
    config: &EngineConfig,
    base: &TasteVector,
    answers: &[QuizAnswer],
    pairs: &[QuizPair],
) -> Result<TasteVector> {
    let by_id = index_pairs(pairs);
    let mut vector = base.clone();
    for answer in answers {
        let pair = by_id
            .get(answer.pair_id.as_str())
            .ok_or_else(|| TasteError::UnknownPair(answer.pair_id.clone()))?;
        apply_answer(&config.scoring, &mut vector, pair, answer);
    }
    vector.clamp();
    Ok(vector)
}

/// Derive the per-dimension evidence mass from a quiz answer log
///
/// Each tested dimension accrues the answer's decisiveness scaled by its
/// phase weight: a clear A/B pick contributes more than "both"/"neither",
/// and "skip" contributes nothing.
pub fn compute_quiz_confidence(
    config: &EngineConfig,
    answers: &[QuizAnswer],
    pairs: &[QuizPair],
) -> Result<ConfidenceVector> {
    let by_id = index_pairs(pairs);
    let mut confidence = ConfidenceVector::zero();
    for answer in answers {
        let pair = by_id
            .get(answer.pair_id.as_str())
            .ok_or_else(|| TasteError::UnknownPair(answer.pair_id.clone()))?;
        let decisiveness = match answer.choice {
            Choice::A | Choice::B => config.scoring.decisive_confidence,
            Choice::Both | Choice::Neither => config.scoring.partial_confidence,
            Choice::Skip => 0.0,
        };
        let contribution = decisiveness * phase_weight(&config.scoring, answer.phase);
        for &dim in &pair.dimensions_tested {
            confidence.accrue(dim, contribution);
        }
    }
    Ok(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog;
    use crate::vector::{GenreDim, MetaDim};
    use chrono::Utc;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn answer(pair_id: &str, choice: Choice, phase: QuizPhase) -> QuizAnswer {
        QuizAnswer::new(pair_id, choice, phase, Utc::now())
    }

    fn owned(pairs: Vec<&'static QuizPair>) -> Vec<QuizPair> {
        pairs.into_iter().cloned().collect()
    }

    #[test]
    fn test_skip_is_zero_delta() {
        let pair = catalog::pair_by_id("kinetic-vs-heartfelt").unwrap();
        assert!(answer_delta(&config().scoring, pair, Choice::Skip).is_empty());
    }

    #[test]
    fn test_pick_delta_is_difference_times_gain() {
        let pair = catalog::pair_by_id("kinetic-vs-heartfelt").unwrap();
        let deltas = answer_delta(&config().scoring, pair, Choice::A);
        let action = deltas
            .iter()
            .find(|(d, _)| *d == Dimension::Genre(GenreDim::Action))
            .unwrap()
            .1;
        // (0.9 - 0.0) * 0.3
        assert!((action - 0.27).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_damped() {
        let pair = catalog::pair_by_id("kinetic-vs-heartfelt").unwrap();
        let a_deltas = answer_delta(&config().scoring, pair, Choice::A);
        let b_deltas = answer_delta(&config().scoring, pair, Choice::B);

        // Choosing B moves action negatively, damped by 0.6 relative to the
        // positive movement choosing A produces.
        let dim = Dimension::Genre(GenreDim::Action);
        let pos = a_deltas.iter().find(|(d, _)| *d == dim).unwrap().1;
        let neg = b_deltas.iter().find(|(d, _)| *d == dim).unwrap().1;
        assert!(pos > 0.0 && neg < 0.0);
        assert!((neg.abs() - pos * 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_both_affirms_without_direction() {
        let pair = catalog::pair_by_id("dread-vs-delight").unwrap();
        let deltas = answer_delta(&config().scoring, pair, Choice::Both);
        // horror: 0.3 * 0.9 + 0.3 * 0.0
        let horror = deltas
            .iter()
            .find(|(d, _)| *d == Dimension::Genre(GenreDim::Horror))
            .unwrap()
            .1;
        assert!((horror - 0.27).abs() < 1e-6);
        // tone: 0.3 * (-0.8) + 0.3 * 0.8 = 0
        let tone = deltas
            .iter()
            .find(|(d, _)| *d == Dimension::Meta(MetaDim::Tone))
            .unwrap()
            .1;
        assert!(tone.abs() < 1e-6);
    }

    #[test]
    fn test_neither_touches_genres_only() {
        let pair = catalog::pair_by_id("dread-vs-delight").unwrap();
        let deltas = answer_delta(&config().scoring, pair, Choice::Neither);
        assert!(deltas.iter().all(|(d, _)| !d.is_meta()));
        // comedy appears only in option B with a positive value: one penalty.
        let comedy = deltas
            .iter()
            .find(|(d, _)| *d == Dimension::Genre(GenreDim::Comedy))
            .unwrap()
            .1;
        assert!((comedy + 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_cap_scale_passes_through_far_from_bound() {
        let cfg = config().scoring;
        assert!((cap_scale(&cfg, 0.0, 0.4) - 1.0).abs() < 1e-6);
        assert!((cap_scale(&cfg, -0.2, -0.3) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cap_scale_damps_near_bound() {
        let cfg = config().scoring;
        // Headroom 0.1 against threshold 0.5 and |delta| 0.5.
        let scale = cap_scale(&cfg, 0.9, 0.5);
        assert!((scale - 0.2).abs() < 1e-6);
        // Applied delta never exceeds headroom.
        assert!(0.9 + 0.5 * scale <= 1.0 + 1e-6);
        // At the bound itself nothing passes.
        assert_eq!(cap_scale(&cfg, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_unknown_pair_fails_fast() {
        let pairs = owned(catalog::fixed_pairs());
        let answers = vec![answer("not-a-pair", Choice::A, QuizPhase::Fixed)];
        let err = compute_quiz_vector(&config(), &TasteVector::zero(), &answers, &pairs).unwrap_err();
        assert!(matches!(err, TasteError::UnknownPair(id) if id == "not-a-pair"));
    }

    #[test]
    fn test_all_skip_is_identity() {
        let pairs = owned(catalog::fixed_pairs());
        let answers: Vec<QuizAnswer> = pairs
            .iter()
            .map(|p| answer(p.id, Choice::Skip, QuizPhase::Fixed))
            .collect();
        let base = TasteVector::neutral();
        let out = compute_quiz_vector(&config(), &base, &answers, &pairs).unwrap();
        assert_eq!(out, base);
    }

    #[test]
    fn test_adaptive_phase_weight_reduces_movement() {
        let pair = catalog::pair_by_id("slow-burn-vs-set-piece").unwrap();
        let pairs = vec![pair.clone()];
        let base = TasteVector::zero();

        let full = compute_quiz_vector(
            &config(),
            &base,
            &[answer(pair.id, Choice::B, QuizPhase::Fixed)],
            &pairs,
        )
        .unwrap();
        let reduced = compute_quiz_vector(
            &config(),
            &base,
            &[answer(pair.id, Choice::B, QuizPhase::Adaptive)],
            &pairs,
        )
        .unwrap();

        let dim = Dimension::Genre(GenreDim::Action);
        assert!(reduced.get(dim) > 0.0);
        assert!((reduced.get(dim) - full.get(dim) * 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_output_is_clamped() {
        // Answer the same genre-heavy pair repeatedly; genres accumulate raw
        // but the pass-end clamp restores the bound.
        let pair = catalog::pair_by_id("kinetic-vs-heartfelt").unwrap();
        let pairs = vec![pair.clone()];
        let answers: Vec<QuizAnswer> = (0..8)
            .map(|_| answer(pair.id, Choice::A, QuizPhase::Fixed))
            .collect();
        let out = compute_quiz_vector(&config(), &TasteVector::zero(), &answers, &pairs).unwrap();
        assert!(out.in_bounds());
        assert_eq!(out.genre(GenreDim::Action), 1.0);
        // Meta stays strictly inside thanks to cap-aware scaling.
        assert!(out.meta(MetaDim::Intensity) < 1.0);
    }

    #[test]
    fn test_confidence_scales_with_decisiveness() {
        let pair = catalog::pair_by_id("dread-vs-delight").unwrap();
        let pairs = vec![pair.clone()];
        let dim = Dimension::Genre(GenreDim::Horror);

        let pick = compute_quiz_confidence(
            &config(),
            &[answer(pair.id, Choice::A, QuizPhase::Fixed)],
            &pairs,
        )
        .unwrap();
        let both = compute_quiz_confidence(
            &config(),
            &[answer(pair.id, Choice::Both, QuizPhase::Fixed)],
            &pairs,
        )
        .unwrap();
        let skip = compute_quiz_confidence(
            &config(),
            &[answer(pair.id, Choice::Skip, QuizPhase::Fixed)],
            &pairs,
        )
        .unwrap();

        assert!((pick.get(dim) - 1.0).abs() < 1e-6);
        assert!((both.get(dim) - 0.5).abs() < 1e-6);
        assert_eq!(skip.get(dim), 0.0);
        // Untested dimensions accrue nothing.
        assert_eq!(pick.get(Dimension::Genre(GenreDim::War)), 0.0);
    }
}
