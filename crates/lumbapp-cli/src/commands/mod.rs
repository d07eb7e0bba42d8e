pub mod config;
pub mod content;
pub mod emergency;
pub mod profile;
pub mod setup;
pub mod streak;

use lumbapp_core::storage::data_dir;
use lumbapp_core::{Config, ProfileSession, ProfileStore};
use tracing::debug;

/// Open this invocation's session, reconciling the visit streak.
pub fn open_session(config: &Config) -> Result<ProfileSession, Box<dyn std::error::Error>> {
    let store = if config.storage.enabled {
        let dir = data_dir()?;
        debug!(dir = %dir.display(), "opening profile storage");
        ProfileStore::in_dir(dir)
    } else {
        debug!("profile storage disabled");
        ProfileStore::unavailable()
    };
    Ok(ProfileSession::open(store, config)?)
}
