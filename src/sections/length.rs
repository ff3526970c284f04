//! Length section - checks password minimum length.

use crate::evaluation::RuleViolation;
use crate::policy::PasswordPolicy;
use super::SectionResult;

/// Checks if the password meets the policy's minimum length.
///
/// Length is measured in characters, not bytes.
///
/// # Returns
/// - `Some(RuleViolation::TooShort { .. })` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &str, policy: &PasswordPolicy) -> SectionResult {
    let actual = password.chars().count();
    if actual < policy.min_length() {
        return Some(RuleViolation::TooShort {
            min: policy.min_length(),
            actual,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("Short1!", &PasswordPolicy::default());
        assert_eq!(result, Some(RuleViolation::TooShort { min: 8, actual: 7 }));
        assert_eq!(
            result.unwrap().to_string(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section("12345678", &PasswordPolicy::default());
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_counts_chars() {
        // 4 characters, 8 bytes
        let result = length_section("ñññ1", &PasswordPolicy::new(5));
        assert_eq!(result, Some(RuleViolation::TooShort { min: 5, actual: 4 }));
    }

    #[test]
    fn test_length_section_empty() {
        let result = length_section("", &PasswordPolicy::default());
        assert_eq!(result, Some(RuleViolation::TooShort { min: 8, actual: 0 }));
    }
}
