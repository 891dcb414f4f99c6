//! Property tests for the bounds and determinism invariants.

use proptest::prelude::*;
use tastevin_core::codec::{array_to_vector, vector_to_array};
use tastevin_core::quiz::catalog;
use tastevin_core::quiz::compute_quiz_vector;
use tastevin_core::quiz::{QuizAnswer, QuizPhase};
use tastevin_core::vector::{blend_away, blend_toward};
use tastevin_core::{cosine_similarity, Choice, Dimension, EngineConfig, TasteVector};

fn taste_vector() -> impl Strategy<Value = TasteVector> {
    proptest::collection::vec(-1.0f32..=1.0, 25).prop_map(|values| {
        let mut v = TasteVector::zero();
        for (dim, value) in Dimension::all().zip(values) {
            v.set(dim, value);
        }
        v.clamp();
        v
    })
}

fn choice() -> impl Strategy<Value = Choice> {
    prop_oneof![
        Just(Choice::A),
        Just(Choice::B),
        Just(Choice::Both),
        Just(Choice::Neither),
        Just(Choice::Skip),
    ]
}

proptest! {
    #[test]
    fn codec_round_trip_is_lossless_for_in_bounds_vectors(v in taste_vector()) {
        let decoded = array_to_vector(&vector_to_array(&v)).unwrap();
        for dim in Dimension::all() {
            prop_assert!((decoded.get(dim) - v.get(dim)).abs() < 1e-6);
        }
    }

    #[test]
    fn blending_preserves_bounds(
        current in taste_vector(),
        target in taste_vector(),
        weight in -1.0f32..=2.0,
        rate in 0.0f32..=1.0,
    ) {
        prop_assert!(blend_toward(&current, &target, weight, rate).in_bounds());
        prop_assert!(blend_away(&current, &target, weight, rate).in_bounds());
    }

    #[test]
    fn blend_toward_never_moves_past_the_target(
        current in taste_vector(),
        target in taste_vector(),
        weight in 0.0f32..=1.0,
    ) {
        let config = EngineConfig::default();
        let blended = blend_toward(&current, &target, weight, config.blending.blend_rate);
        for dim in Dimension::all() {
            let before = (current.get(dim) - target.get(dim)).abs();
            let after = (blended.get(dim) - target.get(dim)).abs();
            prop_assert!(after <= before + 1e-6);
        }
    }

    #[test]
    fn cosine_similarity_is_bounded_and_symmetric(
        a in taste_vector(),
        b in taste_vector(),
    ) {
        let ab = cosine_similarity(&a, &b, None, None);
        let ba = cosine_similarity(&b, &a, None, None);
        prop_assert!(ab >= -1.0 - 1e-5 && ab <= 1.0 + 1e-5);
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn quiz_scoring_stays_in_bounds_for_any_answer_sequence(
        base in taste_vector(),
        choices in proptest::collection::vec(choice(), 5),
    ) {
        let pairs: Vec<_> = catalog::fixed_pairs().into_iter().cloned().collect();
        let answers: Vec<QuizAnswer> = pairs
            .iter()
            .zip(&choices)
            .map(|(pair, &c)| QuizAnswer::new(pair.id, c, QuizPhase::Fixed, chrono::Utc::now()))
            .collect();

        let config = EngineConfig::default();
        let out = compute_quiz_vector(&config, &base, &answers, &pairs).unwrap();
        prop_assert!(out.in_bounds());

        // Same inputs, same output.
        let again = compute_quiz_vector(&config, &base, &answers, &pairs).unwrap();
        prop_assert_eq!(out, again);
    }

    #[test]
    fn ambiguity_is_normalized(v in taste_vector()) {
        for dim in Dimension::all() {
            let ambiguity = v.ambiguity(dim);
            prop_assert!((0.0..=1.0).contains(&ambiguity));
        }
    }
}
