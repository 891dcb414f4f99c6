//! Vector data model for the taste engine
//!
//! Defines the two dimension families and the dense [`TasteVector`] along
//! with its pure operations: clamping, exponential blending toward/away from
//! a target, and weighted (optionally confidence-scaled) cosine similarity.
//!
//! The two bound families are a type-level fact, not a runtime convention:
//! - **Genre dimensions** ([`GenreDim`], 20 keys) are bounded to `[0, 1]` and
//!   represent a binary-leaning affinity strength.
//! - **Meta dimensions** ([`MetaDim`], 5 keys) are bounded to `[-1, 1]` and
//!   represent a bipolar stylistic axis.
//!
//! All operations here are pure and side-effect-free; there is no shared
//! mutable state in this module.

use serde::{Deserialize, Serialize};

/// Number of genre dimensions in the current schema
pub const GENRE_DIM_COUNT: usize = 20;

/// Number of meta dimensions (stable across all schema versions)
pub const META_DIM_COUNT: usize = 5;

/// Total dimension count in the current schema
pub const DIM_COUNT: usize = GENRE_DIM_COUNT + META_DIM_COUNT;

/// Genre affinity dimension, bounded to `[0, 1]`
///
/// Canonical (alphabetical) order is the encoding order of the current
/// storage schema; do not reorder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreDim {
    Action,
    Adventure,
    Animation,
    Anime,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Musical,
    Mystery,
    Romance,
    Scifi,
    Sport,
    Superhero,
    Thriller,
    War,
}

impl GenreDim {
    /// All genre dimensions in canonical order
    pub const ALL: [GenreDim; GENRE_DIM_COUNT] = [
        GenreDim::Action,
        GenreDim::Adventure,
        GenreDim::Animation,
        GenreDim::Anime,
        GenreDim::Comedy,
        GenreDim::Crime,
        GenreDim::Documentary,
        GenreDim::Drama,
        GenreDim::Family,
        GenreDim::Fantasy,
        GenreDim::History,
        GenreDim::Horror,
        GenreDim::Musical,
        GenreDim::Mystery,
        GenreDim::Romance,
        GenreDim::Scifi,
        GenreDim::Sport,
        GenreDim::Superhero,
        GenreDim::Thriller,
        GenreDim::War,
    ];

    /// Position in canonical order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical string key
    pub fn as_str(self) -> &'static str {
        match self {
            GenreDim::Action => "action",
            GenreDim::Adventure => "adventure",
            GenreDim::Animation => "animation",
            GenreDim::Anime => "anime",
            GenreDim::Comedy => "comedy",
            GenreDim::Crime => "crime",
            GenreDim::Documentary => "documentary",
            GenreDim::Drama => "drama",
            GenreDim::Family => "family",
            GenreDim::Fantasy => "fantasy",
            GenreDim::History => "history",
            GenreDim::Horror => "horror",
            GenreDim::Musical => "musical",
            GenreDim::Mystery => "mystery",
            GenreDim::Romance => "romance",
            GenreDim::Scifi => "scifi",
            GenreDim::Sport => "sport",
            GenreDim::Superhero => "superhero",
            GenreDim::Thriller => "thriller",
            GenreDim::War => "war",
        }
    }
}

impl std::fmt::Display for GenreDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bipolar stylistic axis, bounded to `[-1, 1]`
///
/// Pole semantics: tone dark/light, pacing contemplative/kinetic, era
/// classic/contemporary, popularity obscure/mainstream, intensity
/// gentle/intense (negative pole listed first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaDim {
    Tone,
    Pacing,
    Era,
    Popularity,
    Intensity,
}

impl MetaDim {
    /// All meta dimensions in frozen encoding order
    pub const ALL: [MetaDim; META_DIM_COUNT] = [
        MetaDim::Tone,
        MetaDim::Pacing,
        MetaDim::Era,
        MetaDim::Popularity,
        MetaDim::Intensity,
    ];

    /// Position in frozen order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical string key
    pub fn as_str(self) -> &'static str {
        match self {
            MetaDim::Tone => "tone",
            MetaDim::Pacing => "pacing",
            MetaDim::Era => "era",
            MetaDim::Popularity => "popularity",
            MetaDim::Intensity => "intensity",
        }
    }
}

impl std::fmt::Display for MetaDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Either dimension family, for mixed lists (tested dimensions, sparse
/// catalogue vectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Genre(GenreDim),
    Meta(MetaDim),
}

impl From<GenreDim> for Dimension {
    fn from(dim: GenreDim) -> Self {
        Dimension::Genre(dim)
    }
}

impl From<MetaDim> for Dimension {
    fn from(dim: MetaDim) -> Self {
        Dimension::Meta(dim)
    }
}

impl Dimension {
    /// Iterate every dimension of the current schema, genres first
    pub fn all() -> impl Iterator<Item = Dimension> {
        GenreDim::ALL
            .iter()
            .copied()
            .map(Dimension::Genre)
            .chain(MetaDim::ALL.iter().copied().map(Dimension::Meta))
    }

    /// The family bound as `(min, max)`
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Dimension::Genre(_) => (0.0, 1.0),
            Dimension::Meta(_) => (-1.0, 1.0),
        }
    }

    /// Whether this is a meta (bipolar) dimension
    pub fn is_meta(self) -> bool {
        matches!(self, Dimension::Meta(_))
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Genre(g) => write!(f, "{}", g),
            Dimension::Meta(m) => write!(f, "{}", m),
        }
    }
}

/// Dense taste vector: one value per canonical dimension
///
/// Every dimension is always present. Public operations keep genre values in
/// `[0, 1]` and meta values in `[-1, 1]`. Persistence goes through the
/// codec's positional arrays, never through direct field serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct TasteVector {
    genres: [f32; GENRE_DIM_COUNT],
    metas: [f32; META_DIM_COUNT],
}

impl Default for TasteVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl TasteVector {
    /// All-zero vector (genre 0 = no affinity signal, meta 0 = neutral)
    pub fn zero() -> Self {
        Self {
            genres: [0.0; GENRE_DIM_COUNT],
            metas: [0.0; META_DIM_COUNT],
        }
    }

    /// Maximum-ambiguity vector: genres 0.5, metas 0.0
    ///
    /// Used as the replay baseline when no quiz was ever completed. Replaying
    /// from "unknown" rather than from "dislikes everything" keeps negative
    /// blending meaningful.
    pub fn neutral() -> Self {
        Self {
            genres: [0.5; GENRE_DIM_COUNT],
            metas: [0.0; META_DIM_COUNT],
        }
    }

    pub fn genre(&self, dim: GenreDim) -> f32 {
        self.genres[dim.index()]
    }

    pub fn meta(&self, dim: MetaDim) -> f32 {
        self.metas[dim.index()]
    }

    pub fn get(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Genre(g) => self.genre(g),
            Dimension::Meta(m) => self.meta(m),
        }
    }

    pub fn set(&mut self, dim: Dimension, value: f32) {
        match dim {
            Dimension::Genre(g) => self.genres[g.index()] = value,
            Dimension::Meta(m) => self.metas[m.index()] = value,
        }
    }

    /// Add a raw delta to one dimension without clamping
    ///
    /// Callers are responsible for a clamp pass; the quiz scorer deliberately
    /// lets genre dimensions accumulate past the bound and clamps at the end
    /// of a scoring pass.
    pub fn add(&mut self, dim: Dimension, delta: f32) {
        match dim {
            Dimension::Genre(g) => self.genres[g.index()] += delta,
            Dimension::Meta(m) => self.metas[m.index()] += delta,
        }
    }

    /// Clip every genre dimension into `[0, 1]` and every meta dimension
    /// into `[-1, 1]`
    pub fn clamp(&mut self) {
        for v in self.genres.iter_mut() {
            *v = v.clamp(0.0, 1.0);
        }
        for v in self.metas.iter_mut() {
            *v = v.clamp(-1.0, 1.0);
        }
    }

    /// Clamped copy
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.clamp();
        out
    }

    /// True when every dimension is inside its family bound
    pub fn in_bounds(&self) -> bool {
        self.genres.iter().all(|v| (0.0..=1.0).contains(v))
            && self.metas.iter().all(|v| (-1.0..=1.0).contains(v))
    }

    /// Strictly-positive genre dimensions, sorted by value descending
    /// (ties broken by canonical order), truncated to `n`
    ///
    /// Zero-affinity genres never qualify as "top", even when fewer than `n`
    /// positive genres exist.
    pub fn top_genres(&self, n: usize) -> Vec<GenreDim> {
        let mut positive: Vec<GenreDim> = GenreDim::ALL
            .iter()
            .copied()
            .filter(|g| self.genre(*g) > 0.0)
            .collect();
        positive.sort_by(|a, b| {
            self.genre(*b)
                .partial_cmp(&self.genre(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index().cmp(&b.index()))
        });
        positive.truncate(n);
        positive
    }

    /// Per-dimension ambiguity: how undecided this vector is on an axis
    ///
    /// Genre dimensions peak at 0.5 ("we truly don't know"); meta dimensions
    /// peak at the neutral midpoint 0.0. Range `[0, 1]` for in-bounds input.
    pub fn ambiguity(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Genre(g) => 1.0 - (self.genre(g) - 0.5).abs() * 2.0,
            Dimension::Meta(m) => 1.0 - self.meta(m).abs(),
        }
    }
}

/// Sparse dimension/value list for hand-authored catalogue data
///
/// Unset dimensions contribute nothing to cluster averaging and zero to pair
/// scoring. The builder style keeps catalogue entries readable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVec {
    entries: Vec<(Dimension, f32)>,
}

impl SparseVec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a genre dimension
    pub fn genre(mut self, dim: GenreDim, value: f32) -> Self {
        self.entries.push((Dimension::Genre(dim), value));
        self
    }

    /// Builder: set a meta dimension
    pub fn meta(mut self, dim: MetaDim, value: f32) -> Self {
        self.entries.push((Dimension::Meta(dim), value));
        self
    }

    /// Value for a dimension, if set
    pub fn get(&self, dim: Dimension) -> Option<f32> {
        self.entries.iter().find(|(d, _)| *d == dim).map(|(_, v)| *v)
    }

    /// Value for a dimension, zero when unset
    pub fn value_or_zero(&self, dim: Dimension) -> f32 {
        self.get(dim).unwrap_or(0.0)
    }

    /// Dimensions this sparse vector defines
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-negative evidence mass per dimension, parallel to [`TasteVector`]
///
/// Measures how much evidence was gathered for each axis, independent of the
/// axis value. Derived from the quiz answer log; persisted only as a cache of
/// the last completed quiz, never consumed as scoring input.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceVector {
    genres: [f32; GENRE_DIM_COUNT],
    metas: [f32; META_DIM_COUNT],
}

impl Default for ConfidenceVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl ConfidenceVector {
    pub fn zero() -> Self {
        Self {
            genres: [0.0; GENRE_DIM_COUNT],
            metas: [0.0; META_DIM_COUNT],
        }
    }

    pub fn get(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Genre(g) => self.genres[g.index()],
            Dimension::Meta(m) => self.metas[m.index()],
        }
    }

    pub fn set(&mut self, dim: Dimension, value: f32) {
        let v = value.max(0.0);
        match dim {
            Dimension::Genre(g) => self.genres[g.index()] = v,
            Dimension::Meta(m) => self.metas[m.index()] = v,
        }
    }

    /// Accrue evidence mass on one dimension
    pub fn accrue(&mut self, dim: Dimension, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        match dim {
            Dimension::Genre(g) => self.genres[g.index()] += amount,
            Dimension::Meta(m) => self.metas[m.index()] += amount,
        }
    }

    /// Scale into `[0, 1]` by dividing by the maximum entry
    ///
    /// An all-zero confidence vector normalizes to all-zero, which makes
    /// confidence-scaled similarity return the neutral 0.
    pub fn normalized(&self) -> ConfidenceVector {
        let max = self
            .genres
            .iter()
            .chain(self.metas.iter())
            .fold(0.0_f32, |acc, v| acc.max(*v));
        if max <= 0.0 {
            return ConfidenceVector::zero();
        }
        let mut out = ConfidenceVector::zero();
        for dim in Dimension::all() {
            out.set(dim, self.get(dim) / max);
        }
        out
    }
}

/// Per-dimension multipliers for weighted similarity, default 1.0 everywhere
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionWeights {
    genres: [f32; GENRE_DIM_COUNT],
    metas: [f32; META_DIM_COUNT],
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            genres: [1.0; GENRE_DIM_COUNT],
            metas: [1.0; META_DIM_COUNT],
        }
    }
}

impl DimensionWeights {
    pub fn uniform() -> Self {
        Self::default()
    }

    pub fn get(&self, dim: Dimension) -> f32 {
        match dim {
            Dimension::Genre(g) => self.genres[g.index()],
            Dimension::Meta(m) => self.metas[m.index()],
        }
    }

    /// Builder: override one dimension's weight (clamped non-negative)
    pub fn with(mut self, dim: Dimension, weight: f32) -> Self {
        let w = weight.max(0.0);
        match dim {
            Dimension::Genre(g) => self.genres[g.index()] = w,
            Dimension::Meta(m) => self.metas[m.index()] = w,
        }
        self
    }
}

/// Move `current` a fraction `rate * weight` of the distance toward `target`,
/// per dimension, then clamp
///
/// A leaky exponential moving average, not a one-shot overwrite: a single
/// strong interaction cannot dominate the profile. `weight` is the
/// interaction-type strength in `[0, 1]`; `rate` is the small step constant.
pub fn blend_toward(current: &TasteVector, target: &TasteVector, weight: f32, rate: f32) -> TasteVector {
    blend(current, target, weight, rate, 1.0)
}

/// Move `current` *away* from `target` by the same magnitude blend_toward
/// would apply, then clamp
///
/// Used for negative feedback (dislike, removed).
pub fn blend_away(current: &TasteVector, target: &TasteVector, weight: f32, rate: f32) -> TasteVector {
    blend(current, target, weight, rate, -1.0)
}

fn blend(current: &TasteVector, target: &TasteVector, weight: f32, rate: f32, direction: f32) -> TasteVector {
    let step = rate * weight.clamp(0.0, 1.0);
    let mut out = current.clone();
    for dim in Dimension::all() {
        let v = current.get(dim);
        let t = target.get(dim);
        out.set(dim, v + (t - v) * step * direction);
    }
    out.clamp();
    out
}

/// Weighted, optionally confidence-scaled cosine similarity
///
/// Each dimension of both vectors is scaled by `weight_d * confidence_d`
/// (each factor defaulting to 1 when absent; confidence is max-normalized
/// first). A zero-magnitude operand on either side yields the defined
/// neutral value 0.0, never NaN. Used identically for cluster similarity,
/// content ranking, and cluster-differentiation diagnostics.
pub fn cosine_similarity(
    a: &TasteVector,
    b: &TasteVector,
    weights: Option<&DimensionWeights>,
    confidence: Option<&ConfidenceVector>,
) -> f32 {
    let normalized = confidence.map(|c| c.normalized());

    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for dim in Dimension::all() {
        let mut scale = weights.map(|w| w.get(dim)).unwrap_or(1.0);
        if let Some(c) = &normalized {
            scale *= c.get(dim);
        }
        let va = a.get(dim) * scale;
        let vb = b.get(dim) * scale;
        dot += va * vb;
        norm_a += va * va;
        norm_b += vb * vb;
    }

    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    let sim = dot / (norm_a.sqrt() * norm_b.sqrt());
    if sim.is_finite() {
        sim
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_is_stable() {
        assert_eq!(GenreDim::Action.index(), 0);
        assert_eq!(GenreDim::War.index(), GENRE_DIM_COUNT - 1);
        assert_eq!(MetaDim::Tone.index(), 0);
        assert_eq!(MetaDim::Intensity.index(), META_DIM_COUNT - 1);
        assert_eq!(Dimension::all().count(), DIM_COUNT);
    }

    #[test]
    fn test_clamp_respects_both_families() {
        let mut v = TasteVector::zero();
        v.set(Dimension::Genre(GenreDim::Action), 1.7);
        v.set(Dimension::Genre(GenreDim::Comedy), -0.3);
        v.set(Dimension::Meta(MetaDim::Tone), -2.0);
        v.set(Dimension::Meta(MetaDim::Pacing), 1.4);
        v.clamp();

        assert_eq!(v.genre(GenreDim::Action), 1.0);
        assert_eq!(v.genre(GenreDim::Comedy), 0.0);
        assert_eq!(v.meta(MetaDim::Tone), -1.0);
        assert_eq!(v.meta(MetaDim::Pacing), 1.0);
        assert!(v.in_bounds());
    }

    #[test]
    fn test_blend_toward_is_leaky() {
        let current = TasteVector::zero();
        let mut target = TasteVector::zero();
        target.set(Dimension::Genre(GenreDim::Horror), 1.0);
        target.set(Dimension::Meta(MetaDim::Tone), -1.0);

        let out = blend_toward(&current, &target, 1.0, 0.1);
        assert!((out.genre(GenreDim::Horror) - 0.1).abs() < 1e-6);
        assert!((out.meta(MetaDim::Tone) + 0.1).abs() < 1e-6);
        // One strong interaction never jumps to the target.
        assert!(out.genre(GenreDim::Horror) < target.genre(GenreDim::Horror));
    }

    #[test]
    fn test_blend_away_mirrors_blend_toward() {
        let mut current = TasteVector::zero();
        current.set(Dimension::Genre(GenreDim::Comedy), 0.5);
        let mut target = TasteVector::zero();
        target.set(Dimension::Genre(GenreDim::Comedy), 1.0);

        let toward = blend_toward(&current, &target, 0.8, 0.1);
        let away = blend_away(&current, &target, 0.8, 0.1);
        let gained = toward.genre(GenreDim::Comedy) - 0.5;
        let lost = 0.5 - away.genre(GenreDim::Comedy);
        assert!((gained - lost).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_magnitude_is_neutral() {
        let zero = TasteVector::zero();
        let mut v = TasteVector::zero();
        v.set(Dimension::Genre(GenreDim::Action), 0.9);

        assert_eq!(cosine_similarity(&zero, &v, None, None), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero, None, None), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let mut v = TasteVector::zero();
        v.set(Dimension::Genre(GenreDim::Action), 0.8);
        v.set(Dimension::Meta(MetaDim::Intensity), 0.6);

        let sim = cosine_similarity(&v, &v, None, None);
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_weights_can_mask_dimensions() {
        let mut a = TasteVector::zero();
        a.set(Dimension::Genre(GenreDim::Action), 1.0);
        a.set(Dimension::Genre(GenreDim::Comedy), 1.0);
        let mut b = TasteVector::zero();
        b.set(Dimension::Genre(GenreDim::Action), 1.0);

        // Masking comedy makes the vectors identical.
        let weights = DimensionWeights::uniform().with(Dimension::Genre(GenreDim::Comedy), 0.0);
        let sim = cosine_similarity(&a, &b, Some(&weights), None);
        assert!((sim - 1.0).abs() < 1e-5);

        let unmasked = cosine_similarity(&a, &b, None, None);
        assert!(unmasked < sim);
    }

    #[test]
    fn test_confidence_scaling_uses_normalized_mass() {
        let mut a = TasteVector::zero();
        a.set(Dimension::Genre(GenreDim::Action), 1.0);
        a.set(Dimension::Genre(GenreDim::Drama), 1.0);
        let mut b = TasteVector::zero();
        b.set(Dimension::Genre(GenreDim::Action), 1.0);

        // All evidence on action: drama disagreement should stop mattering.
        let mut conf = ConfidenceVector::zero();
        conf.accrue(Dimension::Genre(GenreDim::Action), 3.0);
        let sim = cosine_similarity(&a, &b, None, Some(&conf));
        assert!((sim - 1.0).abs() < 1e-5);

        // No evidence at all: neutral.
        let empty = ConfidenceVector::zero();
        assert_eq!(cosine_similarity(&a, &b, None, Some(&empty)), 0.0);
    }

    #[test]
    fn test_top_genres_filters_zero_affinity() {
        let mut v = TasteVector::zero();
        v.set(Dimension::Genre(GenreDim::Horror), 0.9);
        v.set(Dimension::Genre(GenreDim::Thriller), 0.4);
        v.set(Dimension::Genre(GenreDim::Mystery), 0.4);

        let top = v.top_genres(5);
        assert_eq!(top, vec![GenreDim::Horror, GenreDim::Mystery, GenreDim::Thriller]);

        assert_eq!(v.top_genres(1), vec![GenreDim::Horror]);
        assert!(TasteVector::zero().top_genres(5).is_empty());
    }

    #[test]
    fn test_ambiguity_peaks_at_midpoints() {
        let mut v = TasteVector::zero();
        v.set(Dimension::Genre(GenreDim::Action), 0.5);
        assert!((v.ambiguity(Dimension::Genre(GenreDim::Action)) - 1.0).abs() < 1e-6);
        assert!((v.ambiguity(Dimension::Meta(MetaDim::Tone)) - 1.0).abs() < 1e-6);

        v.set(Dimension::Genre(GenreDim::Action), 1.0);
        v.set(Dimension::Meta(MetaDim::Tone), -1.0);
        assert!(v.ambiguity(Dimension::Genre(GenreDim::Action)).abs() < 1e-6);
        assert!(v.ambiguity(Dimension::Meta(MetaDim::Tone)).abs() < 1e-6);
    }

    #[test]
    fn test_sparse_vec_lookup() {
        let sv = SparseVec::new()
            .genre(GenreDim::Action, 0.9)
            .meta(MetaDim::Tone, -0.6);

        assert_eq!(sv.get(Dimension::Genre(GenreDim::Action)), Some(0.9));
        assert_eq!(sv.get(Dimension::Genre(GenreDim::Comedy)), None);
        assert_eq!(sv.value_or_zero(Dimension::Genre(GenreDim::Comedy)), 0.0);
        assert_eq!(sv.dimensions().count(), 2);
    }
}
