//! Best-effort persistence of the profile snapshot.
//!
//! Nothing here returns an error to the caller. A missing medium reads as
//! empty, an undecodable value reads as empty, and failed writes are logged
//! and dropped; the in-memory session stays authoritative.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use super::backend::{FileStore, KeyValueStore};
use crate::profile::UserProfile;

/// Storage key for the snapshot. Bump the suffix to abandon old layouts.
pub const STORAGE_KEY: &str = "lumapp_user_data_v1";

/// Loads, saves and clears the [`UserProfile`] snapshot.
#[derive(Clone)]
pub struct ProfileStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl ProfileStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Snapshot stored as a file in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStore::new(dir)))
    }

    /// A store with no medium behind it: reads are empty, writes vanish.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn load(&self) -> Option<UserProfile> {
        let backend = self.backend.as_ref()?;
        let raw = match backend.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "failed to read stored profile");
                return None;
            }
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(error = %e, "stored profile could not be decoded, ignoring it");
                None
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) {
        let Some(backend) = self.backend.as_ref() else {
            debug!("storage unavailable, profile not saved");
            return;
        };
        let raw = match serde_json::to_string(profile) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "failed to encode profile");
                return;
            }
        };
        match backend.set(STORAGE_KEY, &raw) {
            Ok(()) => debug!(streak = profile.streak, "profile saved"),
            Err(e) => warn!(error = %e, "failed to save profile"),
        }
    }

    pub fn clear(&self) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        if let Err(e) = backend.remove(STORAGE_KEY) {
            warn!(error = %e, "failed to clear stored profile");
        }
    }
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileStore")
            .field("available", &self.is_available())
            .finish()
    }
}
