//! Vector storage codec and schema migration
//!
//! Converts between the named [`TasteVector`] and the positional numeric
//! array persisted by profile stores. Three historical array widths exist,
//! each with its own frozen dimension order; decode dispatches on array
//! length alone, never on field sniffing:
//!
//! - **v1, width 24**: 19 genres (including `western`, since retired) plus
//!   the 5 meta dimensions.
//! - **v2, width 21**: 16 genres, with `western` permanently dropped and
//!   `documentary` and `musical` temporarily removed.
//! - **v3, width 25**: current; `documentary` and `musical` re-added,
//!   `anime` and `superhero` introduced.
//!
//! Positions with no canonical dimension (`western`) decode to nothing;
//! canonical dimensions missing from a stored layout decode to 0. Encoding
//! always emits the current width.

use crate::error::{Result, TasteError};
use crate::vector::{ConfidenceVector, Dimension, GenreDim, MetaDim, TasteVector, DIM_COUNT};

use Dimension::{Genre as G, Meta as M};
use GenreDim::*;
use MetaDim::*;

/// Array width of the current (v3) schema
pub const CURRENT_WIDTH: usize = DIM_COUNT;

/// Array width of the v1 schema
pub const V1_WIDTH: usize = 24;

/// Array width of the v2 schema
pub const V2_WIDTH: usize = 21;

/// v1 layout. `None` marks the retired `western` slot, which decodes to
/// nothing.
const LAYOUT_V1: [Option<Dimension>; V1_WIDTH] = [
    Some(G(Action)),
    Some(G(Adventure)),
    Some(G(Animation)),
    Some(G(Comedy)),
    Some(G(Crime)),
    Some(G(Documentary)),
    Some(G(Drama)),
    Some(G(Family)),
    Some(G(Fantasy)),
    Some(G(History)),
    Some(G(Horror)),
    Some(G(Musical)),
    Some(G(Mystery)),
    Some(G(Romance)),
    Some(G(Scifi)),
    Some(G(Sport)),
    Some(G(Thriller)),
    Some(G(War)),
    None, // western, retired
    Some(M(Tone)),
    Some(M(Pacing)),
    Some(M(Era)),
    Some(M(Popularity)),
    Some(M(Intensity)),
];

/// v2 layout: `western` gone for good, `documentary`/`musical` absent.
const LAYOUT_V2: [Option<Dimension>; V2_WIDTH] = [
    Some(G(Action)),
    Some(G(Adventure)),
    Some(G(Animation)),
    Some(G(Comedy)),
    Some(G(Crime)),
    Some(G(Drama)),
    Some(G(Family)),
    Some(G(Fantasy)),
    Some(G(History)),
    Some(G(Horror)),
    Some(G(Mystery)),
    Some(G(Romance)),
    Some(G(Scifi)),
    Some(G(Sport)),
    Some(G(Thriller)),
    Some(G(War)),
    Some(M(Tone)),
    Some(M(Pacing)),
    Some(M(Era)),
    Some(M(Popularity)),
    Some(M(Intensity)),
];

/// Layout for a stored array length, if any schema version ever used it
fn layout_for_width(width: usize) -> Result<&'static [Option<Dimension>]> {
    match width {
        V1_WIDTH => Ok(&LAYOUT_V1),
        V2_WIDTH => Ok(&LAYOUT_V2),
        CURRENT_WIDTH => Ok(&LAYOUT_V3),
        other => Err(TasteError::UnknownSchemaWidth(other)),
    }
}

/// v3 (current) layout: full canonical order, genres then metas.
const LAYOUT_V3: [Option<Dimension>; CURRENT_WIDTH] = [
    Some(G(Action)),
    Some(G(Adventure)),
    Some(G(Animation)),
    Some(G(Anime)),
    Some(G(Comedy)),
    Some(G(Crime)),
    Some(G(Documentary)),
    Some(G(Drama)),
    Some(G(Family)),
    Some(G(Fantasy)),
    Some(G(History)),
    Some(G(Horror)),
    Some(G(Musical)),
    Some(G(Mystery)),
    Some(G(Romance)),
    Some(G(Scifi)),
    Some(G(Sport)),
    Some(G(Superhero)),
    Some(G(Thriller)),
    Some(G(War)),
    Some(M(Tone)),
    Some(M(Pacing)),
    Some(M(Era)),
    Some(M(Popularity)),
    Some(M(Intensity)),
];

/// Encode a taste vector into the current positional layout
pub fn vector_to_array(v: &TasteVector) -> Vec<f32> {
    Dimension::all().map(|dim| v.get(dim)).collect()
}

/// Decode a stored positional array of any historical width
///
/// Missing canonical dimensions default to 0; the decoded vector is clamped
/// so out-of-range stored values cannot break the bounds invariant.
pub fn array_to_vector(arr: &[f32]) -> Result<TasteVector> {
    let layout = layout_for_width(arr.len())?;
    let mut v = TasteVector::zero();
    for (slot, value) in layout.iter().zip(arr.iter()) {
        if let Some(dim) = slot {
            v.set(*dim, *value);
        }
    }
    v.clamp();
    Ok(v)
}

/// Encode a confidence vector into the current positional layout
pub fn confidence_to_array(c: &ConfidenceVector) -> Vec<f32> {
    Dimension::all().map(|dim| c.get(dim)).collect()
}

/// Decode a stored confidence array; shares the layout tables but only
/// clamps to non-negative (confidence is unbounded evidence mass)
pub fn array_to_confidence(arr: &[f32]) -> Result<ConfidenceVector> {
    let layout = layout_for_width(arr.len())?;
    let mut c = ConfidenceVector::zero();
    for (slot, value) in layout.iter().zip(arr.iter()) {
        if let Some(dim) = slot {
            c.set(*dim, value.max(0.0));
        }
    }
    Ok(c)
}

/// Serde adapter: `#[serde(with = "codec::vector_as_array")]`
pub mod vector_as_array {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &TasteVector, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        vector_to_array(v).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<TasteVector, D::Error> {
        let arr = Vec::<f32>::deserialize(deserializer)?;
        array_to_vector(&arr).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional vectors:
/// `#[serde(with = "codec::opt_vector_as_array")]`
pub mod opt_vector_as_array {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        v: &Option<TasteVector>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        v.as_ref().map(vector_to_array).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<TasteVector>, D::Error> {
        let arr = Option::<Vec<f32>>::deserialize(deserializer)?;
        match arr {
            Some(arr) => array_to_vector(&arr).map(Some).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Serde adapter for optional confidence vectors:
/// `#[serde(with = "codec::opt_confidence_as_array")]`
pub mod opt_confidence_as_array {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        c: &Option<ConfidenceVector>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        c.as_ref().map(confidence_to_array).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<ConfidenceVector>, D::Error> {
        let arr = Option::<Vec<f32>>::deserialize(deserializer)?;
        match arr {
            Some(arr) => array_to_confidence(&arr)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v3_layout_matches_canonical_order() {
        for (slot, dim) in LAYOUT_V3.iter().zip(Dimension::all()) {
            assert_eq!(*slot, Some(dim));
        }
    }

    #[test]
    fn test_current_roundtrip() {
        let mut v = TasteVector::zero();
        v.set(G(Action), 0.9);
        v.set(G(Anime), 0.4);
        v.set(G(Superhero), 0.6);
        v.set(M(Tone), -0.7);
        v.set(M(Intensity), 0.5);

        let arr = vector_to_array(&v);
        assert_eq!(arr.len(), CURRENT_WIDTH);
        let decoded = array_to_vector(&arr).unwrap();
        assert_eq!(decoded, v);
    }

    #[test]
    fn test_v1_decode_discards_western() {
        let mut arr = vec![0.0; V1_WIDTH];
        arr[0] = 0.8; // action
        arr[5] = 0.6; // documentary
        arr[11] = 0.5; // musical
        arr[18] = 0.9; // western, retired slot
        arr[19] = -0.4; // tone

        let v = array_to_vector(&arr).unwrap();
        assert!((v.genre(Action) - 0.8).abs() < 1e-6);
        assert!((v.genre(Documentary) - 0.6).abs() < 1e-6);
        assert!((v.genre(Musical) - 0.5).abs() < 1e-6);
        assert!((v.meta(Tone) + 0.4).abs() < 1e-6);
        // Dimensions v1 never had decode to 0.
        assert_eq!(v.genre(Anime), 0.0);
        assert_eq!(v.genre(Superhero), 0.0);
    }

    #[test]
    fn test_v2_decode_missing_dims_default_to_zero() {
        let mut arr = vec![0.0; V2_WIDTH];
        arr[0] = 0.7; // action
        arr[14] = 0.6; // thriller
        arr[16] = -0.5; // tone
        arr[20] = 0.8; // intensity

        let v = array_to_vector(&arr).unwrap();
        assert!((v.genre(Action) - 0.7).abs() < 1e-6);
        assert!((v.genre(Thriller) - 0.6).abs() < 1e-6);
        assert!((v.meta(Tone) + 0.5).abs() < 1e-6);
        assert!((v.meta(Intensity) - 0.8).abs() < 1e-6);
        // Temporarily-removed dims read back as 0.
        assert_eq!(v.genre(Documentary), 0.0);
        assert_eq!(v.genre(Musical), 0.0);
    }

    #[test]
    fn test_unknown_width_fails_fast() {
        let err = array_to_vector(&[0.0; 19]).unwrap_err();
        assert!(matches!(err, TasteError::UnknownSchemaWidth(19)));
        let err = array_to_vector(&[]).unwrap_err();
        assert!(matches!(err, TasteError::UnknownSchemaWidth(0)));
    }

    #[test]
    fn test_decode_clamps_out_of_range_values() {
        let mut arr = vec![0.0; CURRENT_WIDTH];
        arr[0] = 3.0; // genre above bound
        arr[20] = -5.0; // meta below bound
        let v = array_to_vector(&arr).unwrap();
        assert_eq!(v.genre(Action), 1.0);
        assert_eq!(v.meta(Tone), -1.0);
        assert!(v.in_bounds());
    }

    #[test]
    fn test_confidence_clamps_negative_only() {
        let mut arr = vec![0.0; CURRENT_WIDTH];
        arr[0] = 4.5; // confidence may exceed 1
        arr[1] = -2.0;
        let c = array_to_confidence(&arr).unwrap();
        assert_eq!(c.get(G(Action)), 4.5);
        assert_eq!(c.get(G(Adventure)), 0.0);
    }
}
