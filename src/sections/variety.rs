//! Character class section - checks for uppercase, lowercase and digits.

use crate::classify::CharClass;
use crate::evaluation::RuleViolation;
use super::SectionResult;

/// Checks if the password contains at least one character of `class`.
///
/// # Returns
/// - `Some(RuleViolation::Missing(class))` if no character belongs to `class`
/// - `None` otherwise
pub fn character_class_section(password: &str, class: CharClass) -> SectionResult {
    if password.chars().any(|c| class.matches(c)) {
        return None;
    }
    Some(RuleViolation::Missing(class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_section_missing_uppercase() {
        let result = character_class_section("lowercase123!", CharClass::Uppercase);
        assert_eq!(result, Some(RuleViolation::Missing(CharClass::Uppercase)));
        if let Some(violation) = result {
            assert!(violation.to_string().contains("uppercase"));
        }
    }

    #[test]
    fn test_class_section_missing_lowercase() {
        let result = character_class_section("UPPERCASE123!", CharClass::Lowercase);
        assert_eq!(result, Some(RuleViolation::Missing(CharClass::Lowercase)));
    }

    #[test]
    fn test_class_section_missing_digit() {
        let result = character_class_section("NoNumbers!", CharClass::Digit);
        assert_eq!(result, Some(RuleViolation::Missing(CharClass::Digit)));
        if let Some(violation) = result {
            assert!(violation.to_string().contains("digit"));
        }
    }

    #[test]
    fn test_class_section_circled_digits() {
        let result = character_class_section("Password①②③", CharClass::Digit);
        assert_eq!(result, Some(RuleViolation::Missing(CharClass::Digit)));
    }

    #[test]
    fn test_class_section_unicode_letters() {
        assert_eq!(character_class_section("ÑANDÚ", CharClass::Uppercase), None);
        assert_eq!(character_class_section("señor", CharClass::Lowercase), None);
    }

    #[test]
    fn test_class_section_all_present() {
        for class in CharClass::ALL {
            assert_eq!(character_class_section("HasAll123", class), None);
        }
    }
}
