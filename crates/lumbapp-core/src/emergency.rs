//! Emergency quick-dial targets.

use serde::Serialize;

use crate::profile::UserProfile;
use crate::storage::Config;

/// A number the user can call with one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialTarget {
    pub label: String,
    pub number: String,
}

impl DialTarget {
    /// `tel:` link for the number.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.number)
    }
}

/// Personal contact first (when filled in), then emergency services.
pub fn dial_targets(profile: &UserProfile, config: &Config) -> Vec<DialTarget> {
    let mut targets = Vec::with_capacity(2);
    let name = profile.emergency_contact_name.trim();
    let phone = profile.emergency_contact_phone.trim();
    if !name.is_empty() && !phone.is_empty() {
        targets.push(DialTarget {
            label: format!("Call {name}"),
            number: phone.to_string(),
        });
    }
    targets.push(DialTarget {
        label: "Call emergency services".into(),
        number: config.emergency.services_number.clone(),
    });
    targets
}
