//! JSON-file profile store
//!
//! One `<uuid>.json` per profile under a single directory. Writes go
//! through a temp file and rename so a crashed write never leaves a
//! truncated profile behind.

use crate::error::{Result, TasteError};
use crate::profile::TasteProfile;
use crate::storage::ProfileStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Directory-of-JSON-files store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), "profile store opened");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn load(&self, id: Uuid) -> Result<Option<TasteProfile>> {
        let path = self.path_for(id);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let profile = serde_json::from_slice(&bytes)?;
        Ok(Some(profile))
    }

    async fn save(&self, profile: &TasteProfile) -> Result<()> {
        let path = self.path_for(profile.id);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(profile)?;
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &path).await?;
        debug!(profile = %profile.id, "profile saved");
        Ok(())
    }

    async fn clear(&self, id: Uuid) -> Result<()> {
        match fs::remove_file(self.path_for(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<Uuid>> {
        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| TasteError::Storage(format!("cannot list {}: {}", self.dir.display(), e)))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(Uuid::parse_str)
            {
                Some(Ok(id)) => ids.push(id),
                _ => warn!(path = %path.display(), "skipping non-profile file"),
            }
        }
        ids.sort();
        Ok(ids)
    }
}
