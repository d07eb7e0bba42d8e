mod backend;
mod config;
mod snapshot;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use config::{Config, EmergencyConfig, PushConfig, StorageConfig};
pub use snapshot::{ProfileStore, STORAGE_KEY};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `LUMBAPP_DATA_DIR` wins when set. Otherwise `~/.config/lumbapp`, or
/// `~/.config/lumbapp-dev` when `LUMBAPP_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("LUMBAPP_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("LUMBAPP_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("lumbapp-dev")
            } else {
                base_dir.join("lumbapp")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
