//! Passive interaction blending
//!
//! Every catalogue interaction (like, watch, save, click, dislike, remove)
//! nudges the profile vector toward or away from the content's own vector.
//! Recording is incremental and recency-blind; [`recompute_vector`] replays
//! the retained log from the quiz baseline with recency weighting applied,
//! so a recompute never stacks on top of already-blended state.

use crate::codec;
use crate::config::{BlendingConfig, EngineConfig};
use crate::profile::TasteProfile;
use crate::vector::{blend_away, blend_toward, TasteVector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the user did with a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Explicit thumbs-up
    Like,

    /// Explicit thumbs-down
    Dislike,

    /// Finished watching
    Watched,

    /// Added to a list
    Saved,

    /// Opened the detail view
    Clicked,

    /// Taken off a list
    Removed,
}

impl InteractionKind {
    /// Blend strength for this kind, before recency weighting
    pub fn base_weight(self, config: &BlendingConfig) -> f32 {
        match self {
            InteractionKind::Like => config.like_weight,
            InteractionKind::Dislike => config.dislike_weight,
            InteractionKind::Watched => config.watched_weight,
            InteractionKind::Saved => config.saved_weight,
            InteractionKind::Clicked => config.clicked_weight,
            InteractionKind::Removed => config.removed_weight,
        }
    }

    /// Negative kinds blend away from the content vector
    pub fn is_negative(self) -> bool {
        matches!(self, InteractionKind::Dislike | InteractionKind::Removed)
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InteractionKind::Like => "like",
            InteractionKind::Dislike => "dislike",
            InteractionKind::Watched => "watched",
            InteractionKind::Saved => "saved",
            InteractionKind::Clicked => "clicked",
            InteractionKind::Removed => "removed",
        };
        write!(f, "{}", s)
    }
}

/// One logged catalogue interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Identifier of the content item
    pub content_id: String,

    /// The content's taste vector at interaction time
    #[serde(with = "codec::vector_as_array")]
    pub content_vector: TasteVector,

    /// What the user did
    pub kind: InteractionKind,

    /// When it happened
    pub occurred_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(
        content_id: impl Into<String>,
        content_vector: TasteVector,
        kind: InteractionKind,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content_id: content_id.into(),
            content_vector,
            kind,
            occurred_at,
        }
    }
}

/// Apply one interaction to a profile, returning the updated profile
///
/// The incremental path uses the kind's base weight only; recency tiers are
/// a replay-time concern. The log keeps at most `interaction_log_cap`
/// entries, oldest dropped first.
pub fn record_interaction(
    profile: &TasteProfile,
    interaction: Interaction,
    config: &EngineConfig,
) -> TasteProfile {
    let weight = interaction.kind.base_weight(&config.blending);
    let rate = config.blending.blend_rate;
    let vector = if interaction.kind.is_negative() {
        blend_away(&profile.vector, &interaction.content_vector, weight, rate)
    } else {
        blend_toward(&profile.vector, &interaction.content_vector, weight, rate)
    };
    debug!(
        content = %interaction.content_id,
        kind = %interaction.kind,
        weight,
        "interaction recorded"
    );

    let mut updated = profile.clone();
    updated.vector = vector;
    updated.updated_at = interaction.occurred_at;
    updated.interactions.push(interaction);
    let cap = config.blending.interaction_log_cap;
    if updated.interactions.len() > cap {
        let excess = updated.interactions.len() - cap;
        updated.interactions.drain(..excess);
    }
    updated
}

/// Replay the interaction log from the quiz baseline with recency weighting
///
/// The replay always starts from the stored baseline (or the neutral vector
/// when the profile never took the quiz), never from the current derived
/// vector, so repeated recomputes of the same log agree exactly.
pub fn recompute_vector(
    profile: &TasteProfile,
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> TasteVector {
    let mut log: Vec<&Interaction> = profile.interactions.iter().collect();
    log.sort_by_key(|i| i.occurred_at);

    let rate = config.blending.blend_rate;
    let mut vector = profile.replay_baseline();
    for interaction in log {
        let age_days = (now - interaction.occurred_at).num_days();
        let recency = config.blending.recency.weight_for_age_days(age_days);
        let weight = interaction.kind.base_weight(&config.blending) * recency;
        vector = if interaction.kind.is_negative() {
            blend_away(&vector, &interaction.content_vector, weight, rate)
        } else {
            blend_toward(&vector, &interaction.content_vector, weight, rate)
        };
    }
    debug!(
        profile = %profile.id,
        interactions = profile.interactions.len(),
        "vector recomputed from baseline"
    );
    vector
}
