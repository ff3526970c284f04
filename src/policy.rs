//! Password composition policy and the validation predicate.

use std::env::VarError;

use crate::classify::ClassSet;
use crate::error::PolicyError;

/// Minimum number of characters (Unicode scalar values) a password must have.
pub const MIN_LENGTH: usize = 8;

/// Environment variable overriding the minimum length in [`PasswordPolicy::from_env`].
pub const MIN_LENGTH_ENV: &str = "PWD_POLICY_MIN_LENGTH";

/// Composition rules a password must satisfy.
///
/// The default policy requires at least [`MIN_LENGTH`] characters and at least
/// one uppercase letter, one lowercase letter and one decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Builds a policy from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_POLICY_MIN_LENGTH`
    /// 2. Default minimum length ([`MIN_LENGTH`])
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidMinLength`] if the variable is set but is
    /// not a positive integer, including values that are not valid UTF-8.
    pub fn from_env() -> Result<Self, PolicyError> {
        match std::env::var(MIN_LENGTH_ENV) {
            Ok(raw) => {
                let min_length = parse_min_length(&raw)?;
                #[cfg(feature = "tracing")]
                tracing::debug!("Minimum length overridden from {}: {}", MIN_LENGTH_ENV, min_length);
                Ok(Self::new(min_length))
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(PolicyError::InvalidMinLength(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns `true` if `candidate` satisfies every rule of this policy.
    ///
    /// Length is counted in characters, not bytes. The length check runs
    /// first; the character scan stops as soon as all classes have been seen.
    pub fn validate(&self, candidate: &str) -> bool {
        if candidate.chars().count() < self.min_length {
            return false;
        }

        let mut seen = ClassSet::default();
        for c in candidate.chars() {
            seen.insert_char(c);
            if seen.is_full() {
                return true;
            }
        }
        false
    }
}

/// Parses a minimum length value as found in configuration.
pub fn parse_min_length(raw: &str) -> Result<usize, PolicyError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PolicyError::InvalidMinLength(raw.to_string())),
    }
}

/// Validates `candidate` against the default policy.
///
/// # Example
///
/// ```rust
/// assert!(pwd_policy::validate("PassworD1"));
/// assert!(!pwd_policy::validate("Aa12345"));
/// ```
pub fn validate(candidate: &str) -> bool {
    PasswordPolicy::default().validate(candidate)
}
