//! In-memory profile store

use crate::error::Result;
use crate::profile::TasteProfile;
use crate::storage::ProfileStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// HashMap-backed store, useful for tests and hosts that persist elsewhere
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, TasteProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self, id: Uuid) -> Result<Option<TasteProfile>> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn save(&self, profile: &TasteProfile) -> Result<()> {
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        Ok(())
    }

    async fn clear(&self, id: Uuid) -> Result<()> {
        self.profiles.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Uuid>> {
        let mut ids: Vec<Uuid> = self.profiles.read().await.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}
