//! Adaptive onboarding quiz
//!
//! Three phases of forced-choice comparisons turn a cluster-seeded vector
//! into a scored taste profile:
//!
//! - **Fixed**: five hand-picked pairs every user answers.
//! - **Genre-responsive**: pairs chosen to cover the user's strongest genres
//!   that the fixed set leaves untouched.
//! - **Adaptive**: pairs chosen to resolve whichever dimensions the interim
//!   vector is still most ambiguous about.
//!
//! The [`catalog`] is declarative data; [`selector`] and [`scorer`] are pure
//! functions over it; [`session`] is the phase state machine that sequences
//! them and only scores at phase boundaries.

pub mod catalog;
pub mod scorer;
pub mod selector;
pub mod session;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::{PairOption, QuizPair};
pub use scorer::{compute_quiz_confidence, compute_quiz_vector};
pub use selector::{select_adaptive_pairs, select_genre_responsive_pairs};
pub use session::{QuizOutcome, QuizSession, SessionAdvance};

/// Quiz phase tag carried by pairs and answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// Hand-picked opening pairs every user sees
    Fixed,

    /// Pairs triggered by the user's strongest uncovered genres
    GenreResponsive,

    /// Pairs targeting the interim vector's most ambiguous dimensions
    Adaptive,
}

impl std::fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizPhase::Fixed => write!(f, "fixed"),
            QuizPhase::GenreResponsive => write!(f, "genre-responsive"),
            QuizPhase::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// Outcome of one forced-choice comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Preferred option A
    A,

    /// Preferred option B
    B,

    /// Affirmed both options, no net direction
    Both,

    /// Rejected both options
    Neither,

    /// Declined to answer; contributes nothing
    Skip,
}

/// One answered comparison, append-only within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// Id of the answered pair
    pub pair_id: String,

    /// Chosen outcome
    pub choice: Choice,

    /// Phase the pair was asked in
    pub phase: QuizPhase,

    /// When the answer was given
    pub answered_at: DateTime<Utc>,
}

impl QuizAnswer {
    pub fn new(pair_id: impl Into<String>, choice: Choice, phase: QuizPhase, answered_at: DateTime<Utc>) -> Self {
        Self {
            pair_id: pair_id.into(),
            choice,
            phase,
            answered_at,
        }
    }
}
