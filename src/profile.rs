//! Taste profiles and the manager that owns their lifecycle
//!
//! A [`TasteProfile`] is the persisted record: derived vector, quiz
//! baseline, confidence, cluster selections, and the retained interaction
//! log. [`ProfileManager`] serializes all read-modify-write cycles per
//! profile so concurrent updates against the same store never interleave.

use crate::codec;
use crate::config::EngineConfig;
use crate::error::{Result, TasteError};
use crate::interactions::{self, Interaction};
use crate::quiz::QuizOutcome;
use crate::storage::ProfileStore;
use crate::vector::{ConfidenceVector, TasteVector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Current on-disk schema version
///
/// Older profiles carry narrower vector arrays; the codec widens them at
/// decode time and the manager stamps the current version on next save.
pub const SCHEMA_VERSION: u32 = 3;

/// One user's persisted taste state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteProfile {
    /// Stable profile identifier
    pub id: Uuid,

    /// Vector schema version this record was written with
    pub schema_version: u32,

    /// Current derived taste vector
    #[serde(with = "codec::vector_as_array")]
    pub vector: TasteVector,

    /// Post-quiz snapshot, the anchor every recompute replays from
    #[serde(with = "codec::opt_vector_as_array", default)]
    pub quiz_baseline: Option<TasteVector>,

    /// Onboarding cluster selections
    pub cluster_ids: Vec<String>,

    /// Per-dimension evidence mass from the quiz
    #[serde(with = "codec::opt_confidence_as_array", default)]
    pub quiz_confidence: Option<ConfidenceVector>,

    /// Retained interaction log, oldest first
    #[serde(default)]
    pub interactions: Vec<Interaction>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TasteProfile {
    /// Fresh profile with a neutral vector and no quiz evidence
    pub fn new(cluster_ids: Vec<String>) -> Self {
        Self::with_id(Uuid::new_v4(), cluster_ids)
    }

    pub fn with_id(id: Uuid, cluster_ids: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            schema_version: SCHEMA_VERSION,
            vector: TasteVector::neutral(),
            quiz_baseline: None,
            cluster_ids,
            quiz_confidence: None,
            interactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Starting point for interaction replay
    ///
    /// The quiz baseline when one exists, otherwise the neutral vector. The
    /// current derived vector is never the replay anchor.
    pub fn replay_baseline(&self) -> TasteVector {
        self.quiz_baseline
            .clone()
            .unwrap_or_else(TasteVector::neutral)
    }

    /// True when the record was written under an older vector schema
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }
}

/// Lifecycle coordinator over a [`ProfileStore`]
///
/// Holds one async mutex per profile id so each read-modify-write cycle is
/// atomic with respect to other updates through the same manager.
pub struct ProfileManager {
    store: Arc<dyn ProfileStore>,
    config: EngineConfig,
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ProfileManager {
    pub fn new(store: Arc<dyn ProfileStore>, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn lock_for(&self, id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(id).or_default().clone()
    }

    /// Load a profile, migrating stale schema versions in place
    async fn load_required(&self, id: Uuid) -> Result<TasteProfile> {
        let mut profile = self
            .store
            .load(id)
            .await?
            .ok_or(TasteError::ProfileNotFound(id))?;
        if profile.needs_migration() {
            // The codec already widened the arrays at decode; stamping the
            // version persists the migration on the next save.
            info!(profile = %id, from = profile.schema_version, to = SCHEMA_VERSION, "migrating profile schema");
            profile.schema_version = SCHEMA_VERSION;
        }
        Ok(profile)
    }

    /// Fetch an existing profile or create and persist a fresh one
    pub async fn get_or_create(&self, id: Option<Uuid>) -> Result<TasteProfile> {
        let id = id.unwrap_or_else(Uuid::new_v4);
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        if let Some(mut profile) = self.store.load(id).await? {
            if profile.needs_migration() {
                profile.schema_version = SCHEMA_VERSION;
                self.store.save(&profile).await?;
            }
            return Ok(profile);
        }
        let profile = TasteProfile::with_id(id, Vec::new());
        self.store.save(&profile).await?;
        info!(profile = %id, "profile created");
        Ok(profile)
    }

    /// Install a completed quiz outcome as the profile's new anchor
    ///
    /// Resets the interaction log: old interactions were blended against a
    /// baseline that no longer exists.
    pub async fn complete_quiz(
        &self,
        id: Uuid,
        outcome: QuizOutcome,
        cluster_ids: Vec<String>,
    ) -> Result<TasteProfile> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut profile = match self.store.load(id).await? {
            Some(profile) => profile,
            None => TasteProfile::with_id(id, Vec::new()),
        };
        profile.schema_version = SCHEMA_VERSION;
        profile.vector = outcome.vector.clone();
        profile.quiz_baseline = Some(outcome.vector);
        profile.quiz_confidence = Some(outcome.confidence);
        profile.cluster_ids = cluster_ids;
        profile.interactions.clear();
        profile.updated_at = Utc::now();
        self.store.save(&profile).await?;
        info!(profile = %id, "quiz outcome installed");
        Ok(profile)
    }

    /// Blend one interaction into the profile and persist
    pub async fn record_interaction(
        &self,
        id: Uuid,
        interaction: Interaction,
    ) -> Result<TasteProfile> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let profile = self.load_required(id).await?;
        let updated = interactions::record_interaction(&profile, interaction, &self.config);
        self.store.save(&updated).await?;
        Ok(updated)
    }

    /// Replay the interaction log from the baseline with recency weighting
    pub async fn recompute(&self, id: Uuid, now: DateTime<Utc>) -> Result<TasteProfile> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;

        let mut profile = self.load_required(id).await?;
        profile.vector = interactions::recompute_vector(&profile, now, &self.config);
        profile.updated_at = now;
        self.store.save(&profile).await?;
        info!(profile = %id, "profile recomputed");
        Ok(profile)
    }

    /// Delete a profile's stored state
    pub async fn clear(&self, id: Uuid) -> Result<()> {
        let lock = self.lock_for(id).await;
        let _guard = lock.lock().await;
        self.store.clear(id).await?;
        info!(profile = %id, "profile cleared");
        Ok(())
    }

    /// Ids of every stored profile
    pub async fn list(&self) -> Result<Vec<Uuid>> {
        self.store.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryProfileStore;
    use crate::vector::GenreDim;

    fn manager() -> ProfileManager {
        ProfileManager::new(
            Arc::new(MemoryProfileStore::new()),
            EngineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_get_or_create_persists_new_profile() {
        let m = manager();
        let created = m.get_or_create(None).await.unwrap();
        let loaded = m.get_or_create(Some(created.id)).await.unwrap();
        assert_eq!(created.id, loaded.id);
        assert_eq!(loaded.vector, TasteVector::neutral());
    }

    #[tokio::test]
    async fn test_record_interaction_requires_profile() {
        let m = manager();
        let interaction = Interaction::new(
            "tt0001",
            TasteVector::neutral(),
            crate::interactions::InteractionKind::Like,
            Utc::now(),
        );
        let err = m
            .record_interaction(Uuid::new_v4(), interaction)
            .await
            .unwrap_err();
        assert!(matches!(err, TasteError::ProfileNotFound(_)));
    }

    #[tokio::test]
    async fn test_complete_quiz_resets_interaction_log() {
        let m = manager();
        let profile = m.get_or_create(None).await.unwrap();
        let interaction = Interaction::new(
            "tt0001",
            TasteVector::neutral(),
            crate::interactions::InteractionKind::Like,
            Utc::now(),
        );
        m.record_interaction(profile.id, interaction).await.unwrap();

        let mut vector = TasteVector::neutral();
        vector.set(GenreDim::Horror.into(), 0.8);
        let outcome = QuizOutcome {
            vector: vector.clone(),
            confidence: ConfidenceVector::zero(),
            answers: Vec::new(),
        };
        let updated = m
            .complete_quiz(profile.id, outcome, vec!["horror-midnight".to_string()])
            .await
            .unwrap();
        assert!(updated.interactions.is_empty());
        assert_eq!(updated.quiz_baseline, Some(vector.clone()));
        assert_eq!(updated.vector, vector);
    }

    #[tokio::test]
    async fn test_migration_stamps_current_version() {
        let store = Arc::new(MemoryProfileStore::new());
        let m = ProfileManager::new(store.clone(), EngineConfig::default());
        let mut profile = TasteProfile::new(Vec::new());
        profile.schema_version = 1;
        store.save(&profile).await.unwrap();

        let loaded = m.get_or_create(Some(profile.id)).await.unwrap();
        assert_eq!(loaded.schema_version, SCHEMA_VERSION);
        let reloaded = store.load(profile.id).await.unwrap().unwrap();
        assert_eq!(reloaded.schema_version, SCHEMA_VERSION);
    }

    #[tokio::test]
    async fn test_clear_removes_profile() {
        let m = manager();
        let profile = m.get_or_create(None).await.unwrap();
        m.clear(profile.id).await.unwrap();
        assert!(m.list().await.unwrap().is_empty());
    }
}
