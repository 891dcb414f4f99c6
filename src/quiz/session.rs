//! Quiz session state machine
//!
//! Drives the pure selection and scoring functions through the phase
//! sequence `Fixed → GenreResponsive → Adaptive → Complete`. Answers are
//! collected per phase and only scored at phase boundaries: the boundary
//! into the adaptive phase computes the interim vector that ambiguity
//! targeting needs, and the final boundary produces the scored vector and
//! confidence. A session abandoned mid-phase is simply dropped: nothing is
//! scored and the profile is untouched.

use crate::clusters::compute_cluster_seed_vector;
use crate::config::EngineConfig;
use crate::error::{Result, TasteError};
use crate::quiz::{
    catalog, scorer, selector, Choice, QuizAnswer, QuizPair, QuizPhase,
};
use crate::vector::{ConfidenceVector, TasteVector};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// Session progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Fixed,
    GenreResponsive,
    Adaptive,
    Complete,
}

impl SessionState {
    fn phase(self) -> Option<QuizPhase> {
        match self {
            SessionState::Fixed => Some(QuizPhase::Fixed),
            SessionState::GenreResponsive => Some(QuizPhase::GenreResponsive),
            SessionState::Adaptive => Some(QuizPhase::Adaptive),
            SessionState::Complete => None,
        }
    }
}

/// Result of advancing past a phase boundary
#[derive(Debug)]
pub enum SessionAdvance {
    /// The next phase's pairs to present
    NextPhase {
        phase: QuizPhase,
        pairs: Vec<QuizPair>,
    },

    /// The quiz is finished
    Complete(QuizOutcome),
}

/// Final product of a completed session
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    /// Scored taste vector (also the replay baseline for recompute)
    pub vector: TasteVector,

    /// Evidence mass per dimension
    pub confidence: ConfidenceVector,

    /// The full answer log
    pub answers: Vec<QuizAnswer>,
}

/// One user's in-flight quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
    config: EngineConfig,
    cluster_ids: Vec<String>,
    seed: TasteVector,
    state: SessionState,
    current_pairs: Vec<QuizPair>,
    asked: HashSet<String>,
    answers: Vec<QuizAnswer>,
}

impl QuizSession {
    /// Start a session from the user's onboarding cluster selections
    ///
    /// Fails fast on unknown cluster ids.
    pub fn new(config: EngineConfig, cluster_ids: Vec<String>) -> Result<Self> {
        let seed = compute_cluster_seed_vector(&cluster_ids)?;
        let current_pairs: Vec<QuizPair> = catalog::fixed_pairs().into_iter().cloned().collect();
        let asked = current_pairs.iter().map(|p| p.id.to_string()).collect();
        info!(clusters = ?cluster_ids, "quiz session started");
        Ok(Self {
            config,
            cluster_ids,
            seed,
            state: SessionState::Fixed,
            current_pairs,
            asked,
            answers: Vec::new(),
        })
    }

    /// The cluster-derived starting vector
    pub fn seed(&self) -> &TasteVector {
        &self.seed
    }

    /// Pairs presented in the current phase
    pub fn current_pairs(&self) -> &[QuizPair] {
        &self.current_pairs
    }

    /// Current phase, `None` once complete
    pub fn phase(&self) -> Option<QuizPhase> {
        self.state.phase()
    }

    /// Answers collected so far
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    /// Record an answer for a pair in the current phase
    ///
    /// Answering a pair outside the current phase's list, answering the
    /// same pair twice, or answering a completed session is a hard error.
    pub fn submit_answer(
        &mut self,
        pair_id: &str,
        choice: Choice,
        answered_at: DateTime<Utc>,
    ) -> Result<()> {
        let phase = self.state.phase().ok_or_else(|| {
            TasteError::PhaseViolation("session is already complete".to_string())
        })?;
        if !self.current_pairs.iter().any(|p| p.id == pair_id) {
            return Err(TasteError::PhaseViolation(format!(
                "pair {} is not part of the {} phase",
                pair_id, phase
            )));
        }
        if self.answers.iter().any(|a| a.pair_id == pair_id) {
            return Err(TasteError::PhaseViolation(format!(
                "pair {} was already answered",
                pair_id
            )));
        }
        self.answers
            .push(QuizAnswer::new(pair_id, choice, phase, answered_at));
        Ok(())
    }

    /// Cross the current phase boundary
    ///
    /// Unanswered pairs in the closing phase are treated as skipped: the
    /// scorer only ever sees answers that were actually given.
    pub fn advance(&mut self) -> Result<SessionAdvance> {
        match self.state {
            SessionState::Fixed => {
                let pairs = selector::select_genre_responsive_pairs(
                    &self.config,
                    &self.seed.top_genres(self.config.selection.top_genre_count),
                    &self.asked,
                    Some(&self.cluster_ids),
                );
                self.enter_phase(SessionState::GenreResponsive, pairs)
            }
            SessionState::GenreResponsive => {
                // Interim pass: everything answered so far, scored from the
                // seed, feeds ambiguity targeting.
                let interim = scorer::compute_quiz_vector(
                    &self.config,
                    &self.seed,
                    &self.answers,
                    &self.answered_pairs(),
                )?;
                debug!("interim vector computed for adaptive selection");
                let pairs = selector::select_adaptive_pairs(
                    &self.config,
                    &interim,
                    &self.asked,
                    self.config.selection.adaptive_quota,
                );
                self.enter_phase(SessionState::Adaptive, pairs)
            }
            SessionState::Adaptive => {
                let answered = self.answered_pairs();
                let vector = scorer::compute_quiz_vector(
                    &self.config,
                    &self.seed,
                    &self.answers,
                    &answered,
                )?;
                let confidence =
                    scorer::compute_quiz_confidence(&self.config, &self.answers, &answered)?;
                self.state = SessionState::Complete;
                self.current_pairs.clear();
                info!(answers = self.answers.len(), "quiz session complete");
                Ok(SessionAdvance::Complete(QuizOutcome {
                    vector,
                    confidence,
                    answers: self.answers.clone(),
                }))
            }
            SessionState::Complete => Err(TasteError::PhaseViolation(
                "cannot advance a completed session".to_string(),
            )),
        }
    }

    fn enter_phase(
        &mut self,
        state: SessionState,
        pairs: Vec<QuizPair>,
    ) -> Result<SessionAdvance> {
        self.asked.extend(pairs.iter().map(|p| p.id.to_string()));
        self.current_pairs = pairs.clone();
        self.state = state;
        let phase = state.phase().expect("entered phase is never Complete");
        debug!(%phase, pairs = pairs.len(), "entering quiz phase");
        Ok(SessionAdvance::NextPhase { phase, pairs })
    }

    /// Every pair asked in any phase so far, resolved from the catalogue
    fn answered_pairs(&self) -> Vec<QuizPair> {
        self.asked
            .iter()
            .filter_map(|id| catalog::pair_by_id(id))
            .cloned()
            .collect()
    }
}
