//! Setup form rules.
//!
//! The session itself accepts any edit; these checks run before the setup
//! flow is allowed to complete.

use crate::error::{FieldError, ValidationError};
use crate::profile::UserProfile;

/// Digits required in an emergency phone number.
pub const PHONE_DIGITS: usize = 10;

/// Check every field the setup form requires, reporting all failures at once.
///
/// # Errors
/// Returns [`ValidationError::Fields`] listing each rejected field.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    let required = [
        ("name", &profile.name),
        ("age", &profile.age),
        ("weight", &profile.weight),
        ("height", &profile.height),
        ("emergencyContact", &profile.emergency_contact_name),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                message: "is required".into(),
            });
        }
    }

    if let Err(message) = check_phone(&profile.emergency_contact_phone) {
        errors.push(FieldError {
            field: "emergencyPhone",
            message,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Fields(errors))
    }
}

fn check_phone(phone: &str) -> Result<(), String> {
    if phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(format!("must be exactly {PHONE_DIGITS} digits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UserProfile {
        UserProfile {
            name: "Ana".into(),
            age: "35".into(),
            weight: "60".into(),
            height: "160".into(),
            emergency_contact_name: "Luis".into(),
            emergency_contact_phone: "5512345678".into(),
            ..Default::default()
        }
    }

    fn fields(err: ValidationError) -> Vec<&'static str> {
        match err {
            ValidationError::Fields(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_profile_passes() {
        assert!(validate_profile(&complete()).is_ok());
    }

    #[test]
    fn empty_profile_reports_every_missing_field() {
        let err = validate_profile(&UserProfile::default()).unwrap_err();
        assert_eq!(
            fields(err),
            vec!["name", "age", "weight", "height", "emergencyContact", "emergencyPhone"]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let profile = UserProfile {
            name: "   ".into(),
            ..complete()
        };
        assert_eq!(fields(validate_profile(&profile).unwrap_err()), vec!["name"]);
    }

    #[test]
    fn phone_must_be_ten_digits() {
        for bad in ["551234567", "55123456789", "55-1234567", "55123456７8"] {
            let profile = UserProfile {
                emergency_contact_phone: bad.into(),
                ..complete()
            };
            assert_eq!(
                fields(validate_profile(&profile).unwrap_err()),
                vec!["emergencyPhone"],
                "{bad} should be rejected"
            );
        }
    }
}
