//! Profile persistence backends
//!
//! A small async trait with two implementations: an in-memory store for
//! tests and embedding hosts, and a JSON-file store that keeps one file per
//! profile. Engine code only ever talks to `dyn ProfileStore`.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryProfileStore;

use crate::error::Result;
use crate::profile::TasteProfile;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence seam for taste profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a profile by id, `None` if it has never been saved
    async fn load(&self, id: Uuid) -> Result<Option<TasteProfile>>;

    /// Persist a profile, replacing any previous version
    async fn save(&self, profile: &TasteProfile) -> Result<()>;

    /// Remove a profile; removing an absent profile is not an error
    async fn clear(&self, id: Uuid) -> Result<()>;

    /// Ids of every stored profile
    async fn list(&self) -> Result<Vec<Uuid>>;
}
