//! The user profile record and its typed edit operations.
//!
//! A device holds exactly one [`UserProfile`]. Its serialized form is the
//! snapshot written by [`ProfileStore`](crate::storage::ProfileStore); every
//! field is optional when decoding so older or partial snapshots still load.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pain level reported on a 0-10 slider.
///
/// Serialized as a one-element array (`[5]`), the shape the slider control
/// has always produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PainLevel(u8);

impl PainLevel {
    pub const MAX: u8 = 10;

    /// Clamps into `0..=10`.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for PainLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.0, Self::MAX)
    }
}

impl Serialize for PainLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.0].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PainLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<i64>::deserialize(deserializer)?;
        Ok(values.first().map(|v| Self::new(*v)).unwrap_or_default())
    }
}

fn default_sex() -> String {
    "masculino".into()
}

/// Profile and visit-streak state for the single local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub weight: String,
    pub height: String,
    pub pain_level: PainLevel,
    #[serde(rename = "emergencyContact", alias = "emergencyContactName")]
    pub emergency_contact_name: String,
    #[serde(rename = "emergencyPhone", alias = "emergencyContactPhone")]
    pub emergency_contact_phone: String,
    pub is_setup_complete: bool,
    /// Consecutive local calendar days the app was opened.
    pub streak: u32,
    /// Local date of the most recent reconciliation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            sex: default_sex(),
            weight: String::new(),
            height: String::new(),
            pain_level: PainLevel::default(),
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            is_setup_complete: false,
            streak: 0,
            last_visit: None,
        }
    }
}

impl UserProfile {
    pub fn setup_state(&self) -> SetupState {
        if self.is_setup_complete {
            SetupState::Complete
        } else {
            SetupState::Incomplete
        }
    }

    /// Write a single edit into the record.
    pub fn apply(&mut self, field: ProfileField) {
        match field {
            ProfileField::Name(v) => self.name = v,
            ProfileField::Age(v) => self.age = v,
            ProfileField::Sex(v) => self.sex = v,
            ProfileField::Weight(v) => self.weight = v,
            ProfileField::Height(v) => self.height = v,
            ProfileField::PainLevel(v) => self.pain_level = v,
            ProfileField::EmergencyContactName(v) => self.emergency_contact_name = v,
            ProfileField::EmergencyContactPhone(v) => self.emergency_contact_phone = v,
        }
    }
}

/// Whether the setup flow has been finished on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupState {
    Incomplete,
    Complete,
}

/// An edit to one user-editable profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileField {
    Name(String),
    Age(String),
    Sex(String),
    Weight(String),
    Height(String),
    PainLevel(PainLevel),
    EmergencyContactName(String),
    EmergencyContactPhone(String),
}

impl ProfileField {
    /// Field names accepted by [`ProfileField::parse`].
    pub const NAMES: &'static [&'static str] = &[
        "name",
        "age",
        "sex",
        "weight",
        "height",
        "pain",
        "contact",
        "phone",
    ];

    /// Build an edit from a field name and raw text value.
    ///
    /// Returns `None` for an unknown field name or a pain level that is not
    /// an integer.
    pub fn parse(field: &str, value: &str) -> Option<Self> {
        let value = value.to_string();
        let edit = match field {
            "name" => Self::Name(value),
            "age" => Self::Age(value),
            "sex" => Self::Sex(value),
            "weight" => Self::Weight(value),
            "height" => Self::Height(value),
            "pain" | "painLevel" => Self::PainLevel(PainLevel::new(value.trim().parse().ok()?)),
            "contact" | "emergencyContact" => Self::EmergencyContactName(value),
            "phone" | "emergencyPhone" => Self::EmergencyContactPhone(value),
            _ => return None,
        };
        Some(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pain_level_clamps_to_slider_range() {
        assert_eq!(PainLevel::new(-3).value(), 0);
        assert_eq!(PainLevel::new(7).value(), 7);
        assert_eq!(PainLevel::new(42).value(), 10);
    }

    #[test]
    fn pain_level_serializes_as_single_element_array() {
        let json = serde_json::to_string(&PainLevel::new(3)).unwrap();
        assert_eq!(json, "[3]");
    }

    #[test]
    fn pain_level_decodes_first_element_or_default() {
        let p: PainLevel = serde_json::from_str("[8, 2]").unwrap();
        assert_eq!(p.value(), 8);
        let p: PainLevel = serde_json::from_str("[]").unwrap();
        assert_eq!(p, PainLevel::default());
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let profile = UserProfile {
            name: "Ana".into(),
            emergency_contact_phone: "5512345678".into(),
            streak: 2,
            last_visit: NaiveDate::from_ymd_opt(2025, 10, 22),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["emergencyPhone"], "5512345678");
        assert_eq!(json["painLevel"], serde_json::json!([5]));
        assert_eq!(json["isSetupComplete"], false);
        assert_eq!(json["lastVisit"], "2025-10-22");
    }

    #[test]
    fn partial_snapshot_fills_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"Luis","streak":3}"#).unwrap();
        assert_eq!(profile.name, "Luis");
        assert_eq!(profile.streak, 3);
        assert_eq!(profile.sex, "masculino");
        assert_eq!(profile.last_visit, None);
        assert_eq!(profile.setup_state(), SetupState::Incomplete);
    }

    #[test]
    fn long_emergency_field_names_are_accepted() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"emergencyContactName":"Rosa","emergencyContactPhone":"5511112222"}"#,
        )
        .unwrap();
        assert_eq!(profile.emergency_contact_name, "Rosa");
        assert_eq!(profile.emergency_contact_phone, "5511112222");
    }

    #[test]
    fn parse_field_edits() {
        assert_eq!(
            ProfileField::parse("pain", " 9 "),
            Some(ProfileField::PainLevel(PainLevel::new(9)))
        );
        assert_eq!(
            ProfileField::parse("phone", "5500000000"),
            Some(ProfileField::EmergencyContactPhone("5500000000".into()))
        );
        assert_eq!(ProfileField::parse("pain", "high"), None);
        assert_eq!(ProfileField::parse("blood_type", "O+"), None);
    }

    #[test]
    fn apply_touches_only_the_named_field() {
        let mut profile = UserProfile::default();
        profile.apply(ProfileField::Weight("72".into()));
        assert_eq!(profile.weight, "72");
        assert_eq!(profile.height, "");
        assert_eq!(profile.streak, 0);
    }
}
