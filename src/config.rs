//! Engine tuning configuration
//!
//! Every tuning knob of the engine is a named configuration field rather
//! than an inline literal: scoring gains and damping, phase weights, the
//! cap-aware scaling threshold, selector quotas and bonuses, blend rate,
//! interaction kind weights, recency tiers and the interaction-log cap.
//! Tuning never requires re-deriving a formula.
//!
//! # Configuration File Format
//!
//! TOML format in `.tastevin/config.toml`:
//!
//! ```toml
//! [scoring]
//! choice_gain = 0.3
//! negative_damping = 0.6
//! adaptive_phase_weight = 0.7
//! cap_threshold = 0.5
//!
//! [selection]
//! genre_responsive_quota = 2
//! adaptive_quota = 5
//! ambiguity_threshold = 0.7
//! separation_reward = 0.25
//!
//! [blending]
//! blend_rate = 0.08
//! interaction_log_cap = 200
//! ```

use crate::error::{Result, TasteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Quiz scoring settings
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Pair selection settings
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Passive-interaction blending settings
    #[serde(default)]
    pub blending: BlendingConfig,
}

/// Quiz scoring settings: answer gains, damping, phase weights, cap scaling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Gain applied to an option-value difference for a real A/B pick, and
    /// to each option's value for a "both" answer
    #[serde(default = "default_choice_gain")]
    pub choice_gain: f32,

    /// Penalty subtracted per positively-valued option on each tested genre
    /// dimension for a "neither" answer
    #[serde(default = "default_neither_penalty")]
    pub neither_penalty: f32,

    /// Multiplier (< 1) applied to negative-direction deltas; one disliked
    /// comparison corrects softer than one liked comparison reinforces
    #[serde(default = "default_negative_damping")]
    pub negative_damping: f32,

    /// Phase weight for fixed-phase answers
    #[serde(default = "default_full_phase_weight")]
    pub fixed_phase_weight: f32,

    /// Phase weight for genre-responsive answers
    #[serde(default = "default_full_phase_weight")]
    pub genre_responsive_phase_weight: f32,

    /// Phase weight for adaptive answers; later answers are individually
    /// less informative once the profile is partially resolved
    #[serde(default = "default_adaptive_phase_weight")]
    pub adaptive_phase_weight: f32,

    /// Headroom distance from a meta bound at which cap-aware scaling
    /// starts damping deltas
    #[serde(default = "default_cap_threshold")]
    pub cap_threshold: f32,

    /// Confidence contribution of a clear A/B pick
    #[serde(default = "default_full_phase_weight")]
    pub decisive_confidence: f32,

    /// Confidence contribution of a "both" or "neither" answer
    #[serde(default = "default_partial_confidence")]
    pub partial_confidence: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            choice_gain: default_choice_gain(),
            neither_penalty: default_neither_penalty(),
            negative_damping: default_negative_damping(),
            fixed_phase_weight: default_full_phase_weight(),
            genre_responsive_phase_weight: default_full_phase_weight(),
            adaptive_phase_weight: default_adaptive_phase_weight(),
            cap_threshold: default_cap_threshold(),
            decisive_confidence: default_full_phase_weight(),
            partial_confidence: default_partial_confidence(),
        }
    }
}

/// Pair selection settings: quotas, coverage scores, ambiguity targeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Genre-responsive pairs to select after the fixed phase
    #[serde(default = "default_genre_responsive_quota")]
    pub genre_responsive_quota: usize,

    /// Adaptive pairs to select after the interim scoring pass
    #[serde(default = "default_adaptive_quota")]
    pub adaptive_quota: usize,

    /// How many of the user's strongest genres feed coverage scoring
    #[serde(default = "default_top_genre_count")]
    pub top_genre_count: usize,

    /// Score per matched trigger genre not covered by the fixed pair set
    #[serde(default = "default_uncovered_genre_score")]
    pub uncovered_genre_score: f32,

    /// Score per matched trigger genre already covered by the fixed set
    #[serde(default = "default_covered_genre_score")]
    pub covered_genre_score: f32,

    /// Flat bonus when a candidate's trigger clusters intersect the user's
    /// selected clusters
    #[serde(default = "default_covered_genre_score")]
    pub trigger_cluster_bonus: f32,

    /// How many of the most-ambiguous dimensions adaptive selection always
    /// targets
    #[serde(default = "default_adaptive_base_dims")]
    pub adaptive_base_dims: usize,

    /// Ambiguity above this threshold adds a dimension to the target set
    /// beyond the base count
    #[serde(default = "default_ambiguity_threshold")]
    pub ambiguity_threshold: f32,

    /// Upper bound on the ambiguous target set
    #[serde(default = "default_max_target_dims")]
    pub max_target_dims: usize,

    /// Score per tested dimension in the ambiguous target set
    #[serde(default = "default_uncovered_genre_score")]
    pub ambiguous_match_score: f32,

    /// Small bonus per tested dimension, rewarding breadth
    #[serde(default = "default_breadth_bonus")]
    pub breadth_bonus: f32,

    /// Reward per unit of option separation on ambiguous dimensions; favors
    /// pairs that will produce a clear, high-information answer
    #[serde(default = "default_separation_reward")]
    pub separation_reward: f32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            genre_responsive_quota: default_genre_responsive_quota(),
            adaptive_quota: default_adaptive_quota(),
            top_genre_count: default_top_genre_count(),
            uncovered_genre_score: default_uncovered_genre_score(),
            covered_genre_score: default_covered_genre_score(),
            trigger_cluster_bonus: default_covered_genre_score(),
            adaptive_base_dims: default_adaptive_base_dims(),
            ambiguity_threshold: default_ambiguity_threshold(),
            max_target_dims: default_max_target_dims(),
            ambiguous_match_score: default_uncovered_genre_score(),
            breadth_bonus: default_breadth_bonus(),
            separation_reward: default_separation_reward(),
        }
    }
}

/// Passive-interaction blending settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendingConfig {
    /// Step size of the exponential blend toward/away from a content vector
    #[serde(default = "default_blend_rate")]
    pub blend_rate: f32,

    /// Maximum interaction-log length; oldest entries pruned first
    #[serde(default = "default_interaction_log_cap")]
    pub interaction_log_cap: usize,

    /// Base weight for an explicit like
    #[serde(default = "default_like_weight")]
    pub like_weight: f32,

    /// Base weight for an explicit dislike (negative direction)
    #[serde(default = "default_dislike_weight")]
    pub dislike_weight: f32,

    /// Base weight for a completed watch
    #[serde(default = "default_watched_weight")]
    pub watched_weight: f32,

    /// Base weight for removing saved content (negative direction)
    #[serde(default = "default_removed_weight")]
    pub removed_weight: f32,

    /// Base weight for saving content for later
    #[serde(default = "default_saved_weight")]
    pub saved_weight: f32,

    /// Base weight for a bare detail-page click
    #[serde(default = "default_clicked_weight")]
    pub clicked_weight: f32,

    /// Recency decay tiers used by full recompute
    #[serde(default)]
    pub recency: RecencyTiers,
}

impl Default for BlendingConfig {
    fn default() -> Self {
        Self {
            blend_rate: default_blend_rate(),
            interaction_log_cap: default_interaction_log_cap(),
            like_weight: default_like_weight(),
            dislike_weight: default_dislike_weight(),
            watched_weight: default_watched_weight(),
            removed_weight: default_removed_weight(),
            saved_weight: default_saved_weight(),
            clicked_weight: default_clicked_weight(),
            recency: RecencyTiers::default(),
        }
    }
}

/// Recency decay tiers: interaction age to replay weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyTiers {
    /// Age bound of the freshest tier, in days
    #[serde(default = "default_fresh_days")]
    pub fresh_days: i64,

    /// Weight for interactions within the fresh tier
    #[serde(default = "default_full_phase_weight")]
    pub fresh_weight: f32,

    /// Age bound of the recent tier, in days
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,

    /// Weight for interactions within the recent tier
    #[serde(default = "default_recent_weight")]
    pub recent_weight: f32,

    /// Age bound of the aging tier, in days
    #[serde(default = "default_aging_days")]
    pub aging_days: i64,

    /// Weight for interactions within the aging tier
    #[serde(default = "default_aging_weight")]
    pub aging_weight: f32,

    /// Weight for anything older than the aging tier
    #[serde(default = "default_stale_weight")]
    pub stale_weight: f32,
}

impl Default for RecencyTiers {
    fn default() -> Self {
        Self {
            fresh_days: default_fresh_days(),
            fresh_weight: default_full_phase_weight(),
            recent_days: default_recent_days(),
            recent_weight: default_recent_weight(),
            aging_days: default_aging_days(),
            aging_weight: default_aging_weight(),
            stale_weight: default_stale_weight(),
        }
    }
}

impl RecencyTiers {
    /// Replay weight for an interaction of the given age
    pub fn weight_for_age_days(&self, age_days: i64) -> f32 {
        if age_days <= self.fresh_days {
            self.fresh_weight
        } else if age_days <= self.recent_days {
            self.recent_weight
        } else if age_days <= self.aging_days {
            self.aging_weight
        } else {
            self.stale_weight
        }
    }
}

// Default value helpers
fn default_choice_gain() -> f32 {
    0.3
}

fn default_neither_penalty() -> f32 {
    0.15
}

fn default_negative_damping() -> f32 {
    0.6
}

fn default_full_phase_weight() -> f32 {
    1.0
}

fn default_adaptive_phase_weight() -> f32 {
    0.7
}

fn default_cap_threshold() -> f32 {
    0.5
}

fn default_partial_confidence() -> f32 {
    0.5
}

fn default_genre_responsive_quota() -> usize {
    2
}

fn default_adaptive_quota() -> usize {
    5
}

fn default_top_genre_count() -> usize {
    5
}

fn default_uncovered_genre_score() -> f32 {
    2.0
}

fn default_covered_genre_score() -> f32 {
    1.0
}

fn default_adaptive_base_dims() -> usize {
    3
}

fn default_ambiguity_threshold() -> f32 {
    0.7
}

fn default_max_target_dims() -> usize {
    6
}

fn default_breadth_bonus() -> f32 {
    0.1
}

fn default_separation_reward() -> f32 {
    0.25
}

fn default_blend_rate() -> f32 {
    0.08
}

fn default_interaction_log_cap() -> usize {
    200
}

fn default_like_weight() -> f32 {
    1.0
}

fn default_dislike_weight() -> f32 {
    0.9
}

fn default_watched_weight() -> f32 {
    0.7
}

fn default_removed_weight() -> f32 {
    0.6
}

fn default_saved_weight() -> f32 {
    0.5
}

fn default_clicked_weight() -> f32 {
    0.2
}

fn default_fresh_days() -> i64 {
    7
}

fn default_recent_days() -> i64 {
    30
}

fn default_recent_weight() -> f32 {
    0.8
}

fn default_aging_days() -> i64 {
    90
}

fn default_aging_weight() -> f32 {
    0.5
}

fn default_stale_weight() -> f32 {
    0.3
}

impl EngineConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| TasteError::Config(format!("Failed to parse config file: {}", e)))?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TasteError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config path for a project
    pub fn default_path() -> PathBuf {
        PathBuf::from(".tastevin/config.toml")
    }
}
