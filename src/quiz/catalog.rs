//! Static quiz-pair catalogue
//!
//! The ~36 hand-authored comparison pairs, kept as a declarative data table
//! so content curation never touches selection or scoring code. Five fixed
//! pairs open every quiz; fourteen genre-responsive pairs carry trigger
//! metadata; seventeen adaptive pairs are drawn on by ambiguity targeting.
//!
//! Authoring conventions, enforced by tests:
//! - `dimensions_tested` is a subset of the union of the two option vectors'
//!   keys; influence is never applied to a dimension the pair doesn't test.
//! - Meta option values stay within `[-0.9, 0.9]` and tested meta
//!   separations within 1.6, so a single answer's weighted delta stays below
//!   the cap-scaling threshold and bounds remain asymptotic.

use crate::quiz::QuizPhase;
use crate::vector::{Dimension, GenreDim, MetaDim, SparseVec};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// One side of a comparison
#[derive(Debug, Clone)]
pub struct PairOption {
    /// Content identity, used by the selector's overlap constraint
    pub content_id: &'static str,

    /// Display title
    pub title: &'static str,

    /// Partial taste vector; unset dimensions contribute zero to scoring
    pub vector: SparseVec,
}

/// An identified comparison pair
#[derive(Debug, Clone)]
pub struct QuizPair {
    /// Stable pair identifier
    pub id: &'static str,

    /// Phase this pair belongs to
    pub phase: QuizPhase,

    /// Dimensions this pair is allowed to influence
    pub dimensions_tested: Vec<Dimension>,

    /// Genres whose prominence makes this pair worth asking
    /// (genre-responsive pairs only)
    pub trigger_genres: Vec<GenreDim>,

    /// Cluster ids whose selection makes this pair worth asking
    /// (genre-responsive pairs only)
    pub trigger_clusters: Vec<&'static str>,

    /// Option A
    pub option_a: PairOption,

    /// Option B
    pub option_b: PairOption,
}

impl QuizPair {
    /// Content identities of both options
    pub fn content_ids(&self) -> [&'static str; 2] {
        [self.option_a.content_id, self.option_b.content_id]
    }

    /// Whether this pair tests the given dimension
    pub fn tests(&self, dim: Dimension) -> bool {
        self.dimensions_tested.contains(&dim)
    }

    /// Absolute separation between the two options on a dimension
    /// (unset dimensions count as zero)
    pub fn separation(&self, dim: Dimension) -> f32 {
        (self.option_a.vector.value_or_zero(dim) - self.option_b.vector.value_or_zero(dim)).abs()
    }
}

fn opt(content_id: &'static str, title: &'static str, vector: SparseVec) -> PairOption {
    PairOption {
        content_id,
        title,
        vector,
    }
}

fn pair(
    id: &'static str,
    phase: QuizPhase,
    tested: &[Dimension],
    trigger_genres: &[GenreDim],
    trigger_clusters: &[&'static str],
    option_a: PairOption,
    option_b: PairOption,
) -> QuizPair {
    QuizPair {
        id,
        phase,
        dimensions_tested: tested.to_vec(),
        trigger_genres: trigger_genres.to_vec(),
        trigger_clusters: trigger_clusters.to_vec(),
        option_a,
        option_b,
    }
}

/// Static pair catalogue, read-only at runtime
pub static PAIRS: Lazy<Vec<QuizPair>> = Lazy::new(|| {
    use Dimension::{Genre as G, Meta as M};
    use GenreDim::*;
    use MetaDim::*;
    use QuizPhase::{Adaptive, Fixed, GenreResponsive};

    vec![
        // ── Fixed phase ──────────────────────────────────────────────
        pair(
            "kinetic-vs-heartfelt",
            Fixed,
            &[G(Action), G(Comedy), G(Thriller), M(Tone), M(Pacing), M(Intensity)],
            &[],
            &[],
            opt(
                "mad-max-fury-road",
                "Mad Max: Fury Road",
                SparseVec::new()
                    .genre(Action, 0.9)
                    .genre(Thriller, 0.6)
                    .meta(Tone, -0.6)
                    .meta(Pacing, 0.8)
                    .meta(Intensity, 0.8),
            ),
            opt(
                "little-miss-sunshine",
                "Little Miss Sunshine",
                SparseVec::new()
                    .genre(Comedy, 0.8)
                    .genre(Drama, 0.6)
                    .genre(Family, 0.5)
                    .meta(Tone, 0.6)
                    .meta(Pacing, -0.3)
                    .meta(Intensity, -0.5),
            ),
        ),
        pair(
            "dread-vs-delight",
            Fixed,
            &[G(Horror), G(Family), G(Comedy), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "hereditary",
                "Hereditary",
                SparseVec::new()
                    .genre(Horror, 0.9)
                    .genre(Mystery, 0.5)
                    .meta(Tone, -0.8)
                    .meta(Intensity, 0.7),
            ),
            opt(
                "paddington-2",
                "Paddington 2",
                SparseVec::new()
                    .genre(Family, 0.9)
                    .genre(Comedy, 0.7)
                    .genre(Animation, 0.3)
                    .meta(Tone, 0.8)
                    .meta(Intensity, -0.6),
            ),
        ),
        pair(
            "spectacle-vs-conversation",
            Fixed,
            &[
                G(Scifi),
                G(Romance),
                G(Drama),
                M(Tone),
                M(Pacing),
                M(Popularity),
                M(Intensity),
            ],
            &[],
            &[],
            opt(
                "dune",
                "Dune",
                SparseVec::new()
                    .genre(Scifi, 0.9)
                    .genre(Adventure, 0.6)
                    .meta(Tone, -0.3)
                    .meta(Pacing, 0.4)
                    .meta(Popularity, 0.6)
                    .meta(Intensity, 0.5),
            ),
            opt(
                "before-sunrise",
                "Before Sunrise",
                SparseVec::new()
                    .genre(Romance, 0.9)
                    .genre(Drama, 0.7)
                    .meta(Tone, 0.3)
                    .meta(Pacing, -0.7)
                    .meta(Popularity, -0.4)
                    .meta(Intensity, -0.4),
            ),
        ),
        pair(
            "dynasty-vs-whimsy",
            Fixed,
            &[G(Crime), G(Comedy), G(Drama), M(Tone), M(Era), M(Pacing)],
            &[],
            &[],
            opt(
                "the-godfather",
                "The Godfather",
                SparseVec::new()
                    .genre(Crime, 0.9)
                    .genre(Drama, 0.8)
                    .meta(Tone, -0.7)
                    .meta(Era, -0.6)
                    .meta(Pacing, -0.4),
            ),
            opt(
                "grand-budapest-hotel",
                "The Grand Budapest Hotel",
                SparseVec::new()
                    .genre(Comedy, 0.8)
                    .genre(Drama, 0.5)
                    .meta(Tone, 0.5)
                    .meta(Era, 0.2)
                    .meta(Pacing, 0.3),
            ),
        ),
        pair(
            "vigilante-vs-valentine",
            Fixed,
            &[
                G(Action),
                G(Superhero),
                G(Thriller),
                G(Romance),
                G(Comedy),
                M(Tone),
                M(Intensity),
                M(Popularity),
            ],
            &[],
            &[],
            opt(
                "the-dark-knight",
                "The Dark Knight",
                SparseVec::new()
                    .genre(Action, 0.8)
                    .genre(Superhero, 0.9)
                    .genre(Thriller, 0.7)
                    .genre(Crime, 0.5)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.7)
                    .meta(Popularity, 0.7),
            ),
            opt(
                "amelie",
                "Amélie",
                SparseVec::new()
                    .genre(Romance, 0.7)
                    .genre(Comedy, 0.6)
                    .meta(Tone, 0.7)
                    .meta(Intensity, -0.3)
                    .meta(Popularity, -0.2),
            ),
        ),
        // ── Genre-responsive phase ───────────────────────────────────
        pair(
            "sweep-vs-siege",
            GenreResponsive,
            &[G(Fantasy), G(Adventure), G(War), G(History), M(Tone), M(Intensity)],
            &[Adventure, War, Fantasy],
            &["epic-worlds"],
            opt(
                "fellowship-of-the-ring",
                "The Fellowship of the Ring",
                SparseVec::new()
                    .genre(Fantasy, 0.9)
                    .genre(Adventure, 0.8)
                    .genre(Action, 0.5)
                    .meta(Tone, -0.2)
                    .meta(Intensity, 0.5)
                    .meta(Popularity, 0.7),
            ),
            opt(
                "saving-private-ryan",
                "Saving Private Ryan",
                SparseVec::new()
                    .genre(War, 0.9)
                    .genre(History, 0.6)
                    .genre(Drama, 0.7)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.8)
                    .meta(Era, -0.3),
            ),
        ),
        pair(
            "hand-drawn-vs-hyperreal",
            GenreResponsive,
            &[G(Animation), G(Anime), G(Family), G(Fantasy), M(Tone), M(Popularity)],
            &[Animation, Anime, Family],
            &["animated-everyone"],
            opt(
                "spirited-away",
                "Spirited Away",
                SparseVec::new()
                    .genre(Anime, 0.9)
                    .genre(Animation, 0.8)
                    .genre(Fantasy, 0.6)
                    .meta(Tone, 0.1)
                    .meta(Popularity, -0.1),
            ),
            opt(
                "toy-story",
                "Toy Story",
                SparseVec::new()
                    .genre(Animation, 0.9)
                    .genre(Family, 0.8)
                    .genre(Comedy, 0.5)
                    .meta(Tone, 0.6)
                    .meta(Popularity, 0.8),
            ),
        ),
        pair(
            "summit-vs-seabed",
            GenreResponsive,
            &[G(Documentary), G(Sport), G(History), M(Pacing), M(Intensity)],
            &[Documentary, Sport],
            &["true-story", "underdog-arena"],
            opt(
                "free-solo",
                "Free Solo",
                SparseVec::new()
                    .genre(Documentary, 0.9)
                    .genre(Sport, 0.7)
                    .genre(Adventure, 0.4)
                    .meta(Pacing, 0.2)
                    .meta(Intensity, 0.7),
            ),
            opt(
                "planet-earth",
                "Planet Earth",
                SparseVec::new()
                    .genre(Documentary, 0.8)
                    .genre(History, 0.5)
                    .meta(Pacing, -0.5)
                    .meta(Intensity, -0.2)
                    .meta(Tone, 0.3),
            ),
        ),
        pair(
            "myth-vs-machine",
            GenreResponsive,
            &[G(Fantasy), G(Scifi), G(Mystery), M(Tone), M(Era), M(Popularity)],
            &[Fantasy, Mystery],
            &["epic-worlds", "future-shock"],
            opt(
                "pans-labyrinth",
                "Pan's Labyrinth",
                SparseVec::new()
                    .genre(Fantasy, 0.9)
                    .genre(Drama, 0.5)
                    .genre(Horror, 0.3)
                    .meta(Tone, -0.6)
                    .meta(Era, -0.2)
                    .meta(Popularity, -0.3),
            ),
            opt(
                "blade-runner-2049",
                "Blade Runner 2049",
                SparseVec::new()
                    .genre(Scifi, 0.9)
                    .genre(Mystery, 0.4)
                    .meta(Tone, -0.5)
                    .meta(Era, 0.5)
                    .meta(Pacing, -0.4)
                    .meta(Popularity, -0.1),
            ),
        ),
        pair(
            "waltz-vs-warpath",
            GenreResponsive,
            &[G(Musical), G(Romance), G(War), G(History), M(Tone), M(Intensity)],
            &[Musical, History, War],
            &[],
            opt(
                "la-la-land",
                "La La Land",
                SparseVec::new()
                    .genre(Musical, 0.9)
                    .genre(Romance, 0.7)
                    .genre(Comedy, 0.4)
                    .meta(Tone, 0.5)
                    .meta(Pacing, 0.2)
                    .meta(Popularity, 0.6),
            ),
            opt(
                "dunkirk",
                "Dunkirk",
                SparseVec::new()
                    .genre(War, 0.8)
                    .genre(History, 0.8)
                    .genre(Thriller, 0.5)
                    .meta(Tone, -0.6)
                    .meta(Intensity, 0.8)
                    .meta(Pacing, 0.5),
            ),
        ),
        pair(
            "whodunit-vs-heist",
            GenreResponsive,
            &[G(Mystery), G(Crime), G(Comedy), M(Pacing), M(Popularity)],
            &[Mystery],
            &["noir-underbelly"],
            opt(
                "knives-out",
                "Knives Out",
                SparseVec::new()
                    .genre(Mystery, 0.9)
                    .genre(Comedy, 0.5)
                    .genre(Crime, 0.5)
                    .meta(Tone, 0.1)
                    .meta(Pacing, 0.1)
                    .meta(Popularity, 0.5),
            ),
            opt(
                "oceans-eleven",
                "Ocean's Eleven",
                SparseVec::new()
                    .genre(Crime, 0.8)
                    .genre(Comedy, 0.6)
                    .genre(Thriller, 0.4)
                    .meta(Tone, 0.4)
                    .meta(Pacing, 0.6)
                    .meta(Popularity, 0.7),
            ),
        ),
        pair(
            "pitch-vs-podium",
            GenreResponsive,
            &[G(Sport), G(Drama), M(Pacing), M(Intensity)],
            &[Sport],
            &["underdog-arena"],
            opt(
                "moneyball",
                "Moneyball",
                SparseVec::new()
                    .genre(Sport, 0.8)
                    .genre(Drama, 0.7)
                    .genre(Documentary, 0.2)
                    .meta(Pacing, -0.3)
                    .meta(Tone, 0.1)
                    .meta(Popularity, 0.4),
            ),
            opt(
                "creed",
                "Creed",
                SparseVec::new()
                    .genre(Sport, 0.9)
                    .genre(Drama, 0.6)
                    .genre(Action, 0.3)
                    .meta(Pacing, 0.5)
                    .meta(Intensity, 0.6)
                    .meta(Tone, -0.1),
            ),
        ),
        pair(
            "ink-vs-ensemble",
            GenreResponsive,
            &[G(Anime), G(Scifi), G(Romance), M(Tone), M(Intensity), M(Era)],
            &[Anime, Animation],
            &[],
            opt(
                "akira",
                "Akira",
                SparseVec::new()
                    .genre(Anime, 0.9)
                    .genre(Scifi, 0.7)
                    .genre(Action, 0.5)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.7)
                    .meta(Era, -0.4),
            ),
            opt(
                "your-name",
                "Your Name",
                SparseVec::new()
                    .genre(Anime, 0.9)
                    .genre(Romance, 0.7)
                    .genre(Fantasy, 0.4)
                    .meta(Tone, 0.5)
                    .meta(Intensity, -0.2)
                    .meta(Era, 0.5),
            ),
        ),
        pair(
            "trek-vs-trenches",
            GenreResponsive,
            &[G(Adventure), G(History), G(Action), M(Pacing), M(Era), M(Popularity)],
            &[Adventure, History],
            &[],
            opt(
                "raiders-of-the-lost-ark",
                "Raiders of the Lost Ark",
                SparseVec::new()
                    .genre(Adventure, 0.9)
                    .genre(Action, 0.7)
                    .genre(Fantasy, 0.3)
                    .meta(Pacing, 0.7)
                    .meta(Tone, 0.2)
                    .meta(Era, -0.3)
                    .meta(Popularity, 0.7),
            ),
            opt(
                "lawrence-of-arabia",
                "Lawrence of Arabia",
                SparseVec::new()
                    .genre(Adventure, 0.7)
                    .genre(History, 0.9)
                    .genre(Drama, 0.6)
                    .meta(Pacing, -0.6)
                    .meta(Tone, -0.2)
                    .meta(Era, -0.8)
                    .meta(Popularity, -0.1),
            ),
        ),
        pair(
            "songbook-vs-stage",
            GenreResponsive,
            &[G(Musical), G(Family), G(Romance), M(Tone), M(Popularity)],
            &[Musical],
            &[],
            opt(
                "greatest-showman",
                "The Greatest Showman",
                SparseVec::new()
                    .genre(Musical, 0.9)
                    .genre(Drama, 0.4)
                    .genre(Family, 0.5)
                    .meta(Tone, 0.6)
                    .meta(Popularity, 0.8)
                    .meta(Intensity, 0.2),
            ),
            opt(
                "sing-street",
                "Sing Street",
                SparseVec::new()
                    .genre(Musical, 0.8)
                    .genre(Comedy, 0.5)
                    .genre(Romance, 0.5)
                    .meta(Tone, 0.4)
                    .meta(Popularity, -0.3)
                    .meta(Era, 0.1),
            ),
        ),
        pair(
            "frontline-vs-fallout",
            GenreResponsive,
            &[G(War), G(Thriller), G(Animation), G(Anime), M(Pacing), M(Tone)],
            &[War, History],
            &[],
            opt(
                "1917",
                "1917",
                SparseVec::new()
                    .genre(War, 0.9)
                    .genre(Thriller, 0.6)
                    .genre(History, 0.5)
                    .meta(Pacing, 0.6)
                    .meta(Intensity, 0.8)
                    .meta(Tone, -0.5),
            ),
            opt(
                "grave-of-the-fireflies",
                "Grave of the Fireflies",
                SparseVec::new()
                    .genre(War, 0.8)
                    .genre(Animation, 0.7)
                    .genre(Anime, 0.6)
                    .genre(Drama, 0.8)
                    .meta(Pacing, -0.4)
                    .meta(Intensity, 0.6)
                    .meta(Tone, -0.8),
            ),
        ),
        pair(
            "casefile-vs-crimewave",
            GenreResponsive,
            &[G(Documentary), G(Crime), G(Mystery), M(Pacing), M(Popularity)],
            &[Documentary, Crime],
            &["true-story", "noir-underbelly"],
            opt(
                "thin-blue-line",
                "The Thin Blue Line",
                SparseVec::new()
                    .genre(Documentary, 0.9)
                    .genre(Crime, 0.6)
                    .genre(Mystery, 0.5)
                    .meta(Tone, -0.5)
                    .meta(Pacing, -0.4)
                    .meta(Popularity, -0.5),
            ),
            opt(
                "city-of-god",
                "City of God",
                SparseVec::new()
                    .genre(Crime, 0.9)
                    .genre(Drama, 0.7)
                    .genre(Thriller, 0.5)
                    .meta(Tone, -0.6)
                    .meta(Pacing, 0.7)
                    .meta(Popularity, 0.2),
            ),
        ),
        pair(
            "spellbound-vs-starbound",
            GenreResponsive,
            &[G(Fantasy), G(Adventure), G(Superhero), G(Comedy), M(Tone), M(Pacing)],
            &[Fantasy, Adventure],
            &["epic-worlds"],
            opt(
                "prisoner-of-azkaban",
                "Harry Potter and the Prisoner of Azkaban",
                SparseVec::new()
                    .genre(Fantasy, 0.9)
                    .genre(Adventure, 0.6)
                    .genre(Family, 0.6)
                    .meta(Tone, -0.1)
                    .meta(Era, 0.1)
                    .meta(Popularity, 0.8),
            ),
            opt(
                "guardians-of-the-galaxy",
                "Guardians of the Galaxy",
                SparseVec::new()
                    .genre(Scifi, 0.7)
                    .genre(Superhero, 0.8)
                    .genre(Comedy, 0.6)
                    .genre(Adventure, 0.7)
                    .meta(Tone, 0.4)
                    .meta(Pacing, 0.7)
                    .meta(Popularity, 0.8),
            ),
        ),
        pair(
            "retro-vs-reboot",
            GenreResponsive,
            &[G(History), G(Musical), M(Era), M(Tone), M(Popularity)],
            &[History, Musical],
            &[],
            opt(
                "amadeus",
                "Amadeus",
                SparseVec::new()
                    .genre(History, 0.9)
                    .genre(Drama, 0.7)
                    .genre(Musical, 0.5)
                    .meta(Era, -0.7)
                    .meta(Tone, -0.2)
                    .meta(Popularity, -0.2),
            ),
            opt(
                "hamilton",
                "Hamilton",
                SparseVec::new()
                    .genre(History, 0.7)
                    .genre(Musical, 0.9)
                    .genre(Drama, 0.5)
                    .meta(Era, 0.7)
                    .meta(Tone, 0.3)
                    .meta(Popularity, 0.7),
            ),
        ),
        // ── Adaptive phase ───────────────────────────────────────────
        pair(
            "slow-burn-vs-set-piece",
            Adaptive,
            &[M(Pacing), M(Intensity), M(Popularity), G(Action), G(Drama)],
            &[],
            &[],
            opt(
                "there-will-be-blood",
                "There Will Be Blood",
                SparseVec::new()
                    .genre(Drama, 0.9)
                    .genre(History, 0.4)
                    .meta(Pacing, -0.8)
                    .meta(Tone, -0.5)
                    .meta(Intensity, 0.5)
                    .meta(Popularity, -0.2),
            ),
            opt(
                "john-wick",
                "John Wick",
                SparseVec::new()
                    .genre(Action, 0.9)
                    .genre(Thriller, 0.6)
                    .meta(Pacing, 0.8)
                    .meta(Tone, -0.3)
                    .meta(Intensity, 0.8)
                    .meta(Popularity, 0.5),
            ),
        ),
        pair(
            "gloom-vs-glow",
            Adaptive,
            &[M(Tone), M(Intensity), G(Comedy), G(Drama)],
            &[],
            &[],
            opt(
                "requiem-for-a-dream",
                "Requiem for a Dream",
                SparseVec::new()
                    .genre(Drama, 0.9)
                    .meta(Tone, -0.8)
                    .meta(Intensity, 0.9)
                    .meta(Popularity, -0.3),
            ),
            opt(
                "school-of-rock",
                "School of Rock",
                SparseVec::new()
                    .genre(Comedy, 0.9)
                    .genre(Musical, 0.5)
                    .meta(Tone, 0.8)
                    .meta(Intensity, -0.2)
                    .meta(Popularity, 0.4),
            ),
        ),
        pair(
            "vault-vs-vanguard",
            Adaptive,
            &[M(Era), G(Mystery), G(Scifi), G(Thriller)],
            &[],
            &[],
            opt(
                "rear-window",
                "Rear Window",
                SparseVec::new()
                    .genre(Mystery, 0.8)
                    .genre(Thriller, 0.7)
                    .meta(Era, -0.9)
                    .meta(Pacing, -0.3)
                    .meta(Tone, -0.3),
            ),
            opt(
                "ex-machina",
                "Ex Machina",
                SparseVec::new()
                    .genre(Scifi, 0.9)
                    .genre(Mystery, 0.5)
                    .meta(Era, 0.8)
                    .meta(Pacing, -0.2)
                    .meta(Tone, -0.4),
            ),
        ),
        pair(
            "cult-vs-crowd",
            Adaptive,
            &[M(Popularity), M(Era), G(Horror), G(Adventure), G(Scifi)],
            &[],
            &[],
            opt(
                "eraserhead",
                "Eraserhead",
                SparseVec::new()
                    .genre(Horror, 0.6)
                    .genre(Mystery, 0.5)
                    .meta(Popularity, -0.9)
                    .meta(Tone, -0.8)
                    .meta(Era, -0.5),
            ),
            opt(
                "jurassic-park",
                "Jurassic Park",
                SparseVec::new()
                    .genre(Adventure, 0.8)
                    .genre(Scifi, 0.7)
                    .genre(Action, 0.6)
                    .meta(Popularity, 0.9)
                    .meta(Tone, 0.1)
                    .meta(Era, -0.2),
            ),
        ),
        pair(
            "simmer-vs-shock",
            Adaptive,
            &[M(Intensity), M(Pacing), M(Tone), G(Thriller), G(Romance)],
            &[],
            &[],
            opt(
                "lost-in-translation",
                "Lost in Translation",
                SparseVec::new()
                    .genre(Drama, 0.8)
                    .genre(Romance, 0.5)
                    .genre(Comedy, 0.3)
                    .meta(Intensity, -0.7)
                    .meta(Pacing, -0.6)
                    .meta(Tone, 0.1),
            ),
            opt(
                "uncut-gems",
                "Uncut Gems",
                SparseVec::new()
                    .genre(Thriller, 0.9)
                    .genre(Crime, 0.6)
                    .genre(Drama, 0.5)
                    .meta(Intensity, 0.9)
                    .meta(Pacing, 0.8)
                    .meta(Tone, -0.6),
            ),
        ),
        pair(
            "haunt-vs-hunt",
            Adaptive,
            &[G(Horror), G(Thriller), G(Crime), M(Popularity)],
            &[],
            &[],
            opt(
                "the-conjuring",
                "The Conjuring",
                SparseVec::new()
                    .genre(Horror, 0.9)
                    .genre(Mystery, 0.5)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.7)
                    .meta(Popularity, 0.5),
            ),
            opt(
                "sicario",
                "Sicario",
                SparseVec::new()
                    .genre(Thriller, 0.9)
                    .genre(Crime, 0.7)
                    .genre(Action, 0.5)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.8)
                    .meta(Popularity, 0.2),
            ),
        ),
        pair(
            "sweethearts-vs-swordplay",
            Adaptive,
            &[G(Romance), G(Action), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "pride-and-prejudice",
                "Pride & Prejudice",
                SparseVec::new()
                    .genre(Romance, 0.9)
                    .genre(Drama, 0.7)
                    .genre(History, 0.5)
                    .meta(Tone, 0.3)
                    .meta(Era, -0.6)
                    .meta(Intensity, -0.3),
            ),
            opt(
                "gladiator",
                "Gladiator",
                SparseVec::new()
                    .genre(Action, 0.9)
                    .genre(History, 0.6)
                    .genre(Drama, 0.6)
                    .meta(Tone, -0.5)
                    .meta(Era, -0.6)
                    .meta(Intensity, 0.8),
            ),
        ),
        pair(
            "giggle-vs-grit",
            Adaptive,
            &[G(Comedy), G(Crime), G(Thriller), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "superbad",
                "Superbad",
                SparseVec::new()
                    .genre(Comedy, 0.9)
                    .meta(Tone, 0.6)
                    .meta(Intensity, -0.1)
                    .meta(Popularity, 0.5)
                    .meta(Era, 0.2),
            ),
            opt(
                "the-departed",
                "The Departed",
                SparseVec::new()
                    .genre(Crime, 0.9)
                    .genre(Thriller, 0.7)
                    .genre(Drama, 0.6)
                    .meta(Tone, -0.7)
                    .meta(Intensity, 0.7)
                    .meta(Popularity, 0.4),
            ),
        ),
        pair(
            "yarn-vs-yesterday",
            Adaptive,
            &[G(Fantasy), G(History), G(War), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "princess-bride",
                "The Princess Bride",
                SparseVec::new()
                    .genre(Fantasy, 0.8)
                    .genre(Comedy, 0.6)
                    .genre(Romance, 0.5)
                    .genre(Adventure, 0.5)
                    .meta(Tone, 0.7)
                    .meta(Intensity, -0.2)
                    .meta(Era, -0.4),
            ),
            opt(
                "schindlers-list",
                "Schindler's List",
                SparseVec::new()
                    .genre(History, 0.9)
                    .genre(Drama, 0.9)
                    .genre(War, 0.6)
                    .meta(Tone, -0.9)
                    .meta(Intensity, 0.8)
                    .meta(Era, -0.5),
            ),
        ),
        pair(
            "galaxies-vs-garages",
            Adaptive,
            &[G(Scifi), G(Drama), M(Pacing), M(Popularity)],
            &[],
            &[],
            opt(
                "interstellar",
                "Interstellar",
                SparseVec::new()
                    .genre(Scifi, 0.9)
                    .genre(Adventure, 0.6)
                    .genre(Drama, 0.5)
                    .meta(Intensity, 0.6)
                    .meta(Popularity, 0.7)
                    .meta(Tone, -0.2)
                    .meta(Pacing, 0.2),
            ),
            opt(
                "manchester-by-the-sea",
                "Manchester by the Sea",
                SparseVec::new()
                    .genre(Drama, 0.9)
                    .meta(Tone, -0.7)
                    .meta(Pacing, -0.7)
                    .meta(Intensity, 0.3)
                    .meta(Popularity, -0.1),
            ),
        ),
        pair(
            "frames-vs-facts",
            Adaptive,
            &[G(Animation), G(Documentary), G(Family), M(Tone), M(Popularity)],
            &[],
            &[],
            opt(
                "wall-e",
                "WALL·E",
                SparseVec::new()
                    .genre(Animation, 0.9)
                    .genre(Scifi, 0.5)
                    .genre(Family, 0.7)
                    .meta(Tone, 0.4)
                    .meta(Intensity, -0.1)
                    .meta(Popularity, 0.7),
            ),
            opt(
                "13th",
                "13th",
                SparseVec::new()
                    .genre(Documentary, 0.9)
                    .genre(History, 0.5)
                    .genre(Crime, 0.4)
                    .meta(Tone, -0.6)
                    .meta(Intensity, 0.4)
                    .meta(Popularity, -0.2),
            ),
        ),
        pair(
            "capes-vs-courtrooms",
            Adaptive,
            &[G(Superhero), G(Animation), M(Pacing), M(Era)],
            &[],
            &[],
            opt(
                "into-the-spider-verse",
                "Spider-Man: Into the Spider-Verse",
                SparseVec::new()
                    .genre(Superhero, 0.9)
                    .genre(Animation, 0.8)
                    .genre(Action, 0.6)
                    .genre(Comedy, 0.4)
                    .meta(Tone, 0.3)
                    .meta(Pacing, 0.8)
                    .meta(Era, 0.6)
                    .meta(Popularity, 0.7),
            ),
            opt(
                "12-angry-men",
                "12 Angry Men",
                SparseVec::new()
                    .genre(Drama, 0.9)
                    .genre(Crime, 0.4)
                    .genre(Mystery, 0.3)
                    .meta(Tone, -0.3)
                    .meta(Pacing, -0.8)
                    .meta(Era, -0.9)
                    .meta(Popularity, -0.1),
            ),
        ),
        pair(
            "serenade-vs-sprint",
            Adaptive,
            &[G(Musical), G(Sport), M(Era), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "singin-in-the-rain",
                "Singin' in the Rain",
                SparseVec::new()
                    .genre(Musical, 0.9)
                    .genre(Comedy, 0.6)
                    .genre(Romance, 0.5)
                    .meta(Tone, 0.8)
                    .meta(Era, -0.9)
                    .meta(Intensity, -0.2),
            ),
            opt(
                "ford-v-ferrari",
                "Ford v Ferrari",
                SparseVec::new()
                    .genre(Sport, 0.8)
                    .genre(Action, 0.5)
                    .genre(Drama, 0.6)
                    .meta(Tone, 0.1)
                    .meta(Era, -0.1)
                    .meta(Intensity, 0.6)
                    .meta(Pacing, 0.6),
            ),
        ),
        pair(
            "puzzlebox-vs-parlor",
            Adaptive,
            &[G(Mystery), G(Thriller), M(Popularity), M(Era), M(Tone)],
            &[],
            &[],
            opt(
                "memento",
                "Memento",
                SparseVec::new()
                    .genre(Mystery, 0.9)
                    .genre(Thriller, 0.7)
                    .genre(Crime, 0.5)
                    .meta(Tone, -0.6)
                    .meta(Pacing, -0.1)
                    .meta(Popularity, -0.2)
                    .meta(Era, 0.2),
            ),
            opt(
                "orient-express",
                "Murder on the Orient Express",
                SparseVec::new()
                    .genre(Mystery, 0.8)
                    .genre(Drama, 0.5)
                    .genre(Crime, 0.5)
                    .meta(Tone, -0.1)
                    .meta(Pacing, -0.3)
                    .meta(Popularity, 0.6)
                    .meta(Era, -0.4),
            ),
        ),
        pair(
            "otaku-vs-offbeat",
            Adaptive,
            &[G(Anime), G(Animation), G(Fantasy), G(Comedy), M(Tone), M(Intensity)],
            &[],
            &[],
            opt(
                "princess-mononoke",
                "Princess Mononoke",
                SparseVec::new()
                    .genre(Anime, 0.9)
                    .genre(Animation, 0.8)
                    .genre(Fantasy, 0.7)
                    .genre(Adventure, 0.5)
                    .meta(Tone, -0.3)
                    .meta(Intensity, 0.5)
                    .meta(Popularity, 0.2),
            ),
            opt(
                "fantastic-mr-fox",
                "Fantastic Mr. Fox",
                SparseVec::new()
                    .genre(Animation, 0.9)
                    .genre(Comedy, 0.7)
                    .genre(Family, 0.6)
                    .meta(Tone, 0.5)
                    .meta(Intensity, -0.2)
                    .meta(Popularity, 0.1)
                    .meta(Pacing, 0.3),
            ),
        ),
        pair(
            "campfire-vs-cliffhanger",
            Adaptive,
            &[G(Family), G(Horror), G(Thriller), G(Sport), M(Tone), M(Intensity), M(Era)],
            &[],
            &[],
            opt(
                "the-sandlot",
                "The Sandlot",
                SparseVec::new()
                    .genre(Family, 0.9)
                    .genre(Comedy, 0.6)
                    .genre(Sport, 0.4)
                    .meta(Tone, 0.7)
                    .meta(Era, -0.4)
                    .meta(Intensity, -0.5),
            ),
            opt(
                "a-quiet-place",
                "A Quiet Place",
                SparseVec::new()
                    .genre(Horror, 0.7)
                    .genre(Thriller, 0.8)
                    .genre(Scifi, 0.4)
                    .meta(Tone, -0.6)
                    .meta(Era, 0.5)
                    .meta(Intensity, 0.8),
            ),
        ),
        pair(
            "wanderlust-vs-warzone",
            Adaptive,
            &[G(Adventure), G(War), M(Tone), M(Era), M(Intensity)],
            &[],
            &[],
            opt(
                "walter-mitty",
                "The Secret Life of Walter Mitty",
                SparseVec::new()
                    .genre(Adventure, 0.8)
                    .genre(Comedy, 0.5)
                    .genre(Drama, 0.4)
                    .meta(Tone, 0.6)
                    .meta(Pacing, 0.2)
                    .meta(Popularity, 0.3)
                    .meta(Era, 0.4),
            ),
            opt(
                "apocalypse-now",
                "Apocalypse Now",
                SparseVec::new()
                    .genre(War, 0.9)
                    .genre(Drama, 0.7)
                    .genre(History, 0.5)
                    .meta(Tone, -0.9)
                    .meta(Pacing, -0.3)
                    .meta(Popularity, 0.1)
                    .meta(Era, -0.6)
                    .meta(Intensity, 0.9),
            ),
        ),
    ]
});

/// All pairs in catalogue order
pub fn all_pairs() -> &'static [QuizPair] {
    &PAIRS
}

/// Look up a pair by id
pub fn pair_by_id(id: &str) -> Option<&'static QuizPair> {
    PAIRS.iter().find(|p| p.id == id)
}

/// Pairs belonging to one phase, in catalogue order
pub fn pairs_for_phase(phase: QuizPhase) -> Vec<&'static QuizPair> {
    PAIRS.iter().filter(|p| p.phase == phase).collect()
}

/// The fixed opening set
pub fn fixed_pairs() -> Vec<&'static QuizPair> {
    pairs_for_phase(QuizPhase::Fixed)
}

/// Genre dimensions exercised by the fixed pair set
pub fn fixed_genre_coverage() -> HashSet<GenreDim> {
    fixed_pairs()
        .iter()
        .flat_map(|p| p.dimensions_tested.iter())
        .filter_map(|d| match d {
            Dimension::Genre(g) => Some(*g),
            Dimension::Meta(_) => None,
        })
        .collect()
}
