//! The one piece of runtime configuration the client is allowed to see.

use serde::Serialize;

use crate::storage::Config;

/// Environment variable holding the public push app identifier.
pub const PUSH_APP_ID_ENV: &str = "LUMBAPP_PUSH_APP_ID";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub push_app_id: Option<String>,
}

impl PublicConfig {
    /// Environment first, then `push.app_id` from the config file.
    pub fn resolve(config: &Config) -> Self {
        Self::from_sources(std::env::var(PUSH_APP_ID_ENV).ok(), config)
    }

    fn from_sources(env_value: Option<String>, config: &Config) -> Self {
        let non_empty = |v: &String| !v.trim().is_empty();
        let push_app_id = env_value
            .filter(non_empty)
            .or_else(|| config.push.app_id.clone().filter(non_empty));
        Self { push_app_id }
    }
}
