//! Tastevin: a taste-vector engine for content discovery
//!
//! Builds and maintains a per-user taste vector over 20 genre dimensions
//! (`[0, 1]`) and 5 meta dimensions (`[-1, 1]`):
//!
//! - **Seeding**: coarse onboarding cluster picks average into a starting
//!   vector ([`clusters`]).
//! - **Quiz**: a three-phase forced-choice quiz sharpens the seed with
//!   cap-aware scoring and per-dimension confidence ([`quiz`]).
//! - **Blending**: passive catalogue interactions nudge the vector over
//!   time, with recency-weighted replay from the quiz baseline
//!   ([`interactions`]).
//! - **Matching**: weighted, confidence-aware cosine similarity compares a
//!   profile against content vectors ([`vector`]).
//!
//! Profiles persist through the [`storage`] seam; [`codec`] migrates
//! vectors stored under older, narrower schemas.

pub mod clusters;
pub mod codec;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod interactions;
pub mod profile;
pub mod quiz;
pub mod storage;
pub mod vector;

pub use config::EngineConfig;
pub use error::{Result, TasteError};
pub use interactions::{Interaction, InteractionKind};
pub use profile::{ProfileManager, TasteProfile, SCHEMA_VERSION};
pub use quiz::{Choice, QuizOutcome, QuizPhase, QuizSession, SessionAdvance};
pub use storage::{JsonFileStore, MemoryProfileStore, ProfileStore};
pub use vector::{
    cosine_similarity, ConfidenceVector, Dimension, DimensionWeights, GenreDim, MetaDim,
    TasteVector,
};
