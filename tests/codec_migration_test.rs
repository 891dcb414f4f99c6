//! Decoding profiles stored under historical vector schemas.

use tastevin_core::codec::{
    array_to_confidence, array_to_vector, vector_to_array, CURRENT_WIDTH, V1_WIDTH, V2_WIDTH,
};
use tastevin_core::{Dimension, GenreDim, MetaDim, TasteError, TasteProfile, TasteVector};

#[test]
fn v1_array_decodes_with_western_discarded() {
    let mut arr = vec![0.0_f32; V1_WIDTH];
    arr[0] = 0.9; // action
    arr[10] = 0.7; // horror
    arr[18] = 0.8; // western, retired slot
    arr[19] = -0.5; // tone
    arr[23] = 0.6; // intensity

    let v = array_to_vector(&arr).unwrap();
    assert_eq!(v.genre(GenreDim::Action), 0.9);
    assert_eq!(v.genre(GenreDim::Horror), 0.7);
    assert_eq!(v.meta(MetaDim::Tone), -0.5);
    assert_eq!(v.meta(MetaDim::Intensity), 0.6);

    // The western value maps to no canonical dimension, and dimensions v1
    // never had default to zero.
    assert_eq!(v.genre(GenreDim::Anime), 0.0);
    assert_eq!(v.genre(GenreDim::Superhero), 0.0);

    // Re-encoding always emits the current width.
    assert_eq!(vector_to_array(&v).len(), CURRENT_WIDTH);
}

#[test]
fn v2_array_decodes_without_documentary_or_musical() {
    let mut arr = vec![0.0_f32; V2_WIDTH];
    arr[0] = 0.4; // action
    arr[15] = 0.9; // war (last genre slot in v2)
    arr[16] = 0.3; // tone

    let v = array_to_vector(&arr).unwrap();
    assert_eq!(v.genre(GenreDim::Action), 0.4);
    assert_eq!(v.genre(GenreDim::War), 0.9);
    assert_eq!(v.meta(MetaDim::Tone), 0.3);
    assert_eq!(v.genre(GenreDim::Documentary), 0.0);
    assert_eq!(v.genre(GenreDim::Musical), 0.0);
}

#[test]
fn unknown_widths_are_rejected() {
    for width in [0usize, 5, 19, 22, 26, 100] {
        let arr = vec![0.0_f32; width];
        let err = array_to_vector(&arr).unwrap_err();
        assert!(matches!(err, TasteError::UnknownSchemaWidth(w) if w == width));
    }
}

#[test]
fn out_of_range_stored_values_are_clamped() {
    let mut arr = vec![0.0_f32; CURRENT_WIDTH];
    arr[0] = 7.0; // genre above 1
    arr[20] = -3.0; // tone below -1
    let v = array_to_vector(&arr).unwrap();
    assert_eq!(v.genre(GenreDim::Action), 1.0);
    assert_eq!(v.meta(MetaDim::Tone), -1.0);
    assert!(v.in_bounds());
}

#[test]
fn confidence_arrays_share_layouts_but_only_floor_at_zero() {
    let mut arr = vec![0.0_f32; V1_WIDTH];
    arr[0] = 3.5; // evidence mass is unbounded above
    arr[19] = -0.2; // negative mass is meaningless
    let c = array_to_confidence(&arr).unwrap();
    assert_eq!(c.get(Dimension::Genre(GenreDim::Action)), 3.5);
    assert_eq!(c.get(Dimension::Meta(MetaDim::Tone)), 0.0);
}

#[test]
fn v1_profile_json_round_trips_into_current_schema() {
    // A profile persisted before the schema widened: 24-wide arrays and an
    // old version stamp. Deserialization widens the arrays; the version
    // stamp is the manager's concern.
    let mut vector = vec![0.0_f32; V1_WIDTH];
    vector[6] = 0.8; // drama in the v1 order
    vector[18] = 0.5; // western
    let json = serde_json::json!({
        "id": "8f5e2f86-9c6f-4e7a-bb0a-2b1c5d3e4f5a",
        "schema_version": 1,
        "vector": vector,
        "quiz_baseline": null,
        "cluster_ids": ["arthouse-contemplative"],
        "quiz_confidence": null,
        "interactions": [],
        "created_at": "2024-02-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z"
    });

    let profile: TasteProfile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.schema_version, 1);
    assert!(profile.needs_migration());
    assert_eq!(profile.vector.genre(GenreDim::Drama), 0.8);
    assert_eq!(profile.vector.genre(GenreDim::Superhero), 0.0);

    // Writing it back emits current-width arrays.
    let serialized = serde_json::to_value(&profile).unwrap();
    let stored = serialized["vector"].as_array().unwrap();
    assert_eq!(stored.len(), CURRENT_WIDTH);
}

#[test]
fn current_schema_round_trip_preserves_every_dimension() {
    let mut v = TasteVector::zero();
    for (i, dim) in Dimension::all().enumerate() {
        let (min, max) = dim.bounds();
        let value = min + (max - min) * (i as f32 / 24.0);
        v.set(dim, value);
    }
    let decoded = array_to_vector(&vector_to_array(&v)).unwrap();
    for dim in Dimension::all() {
        assert!((decoded.get(dim) - v.get(dim)).abs() < 1e-6);
    }
}
