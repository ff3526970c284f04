//! Password composition policy library
//!
//! This library checks whether a candidate password satisfies a fixed
//! set of composition rules:
//!
//! - at least 8 characters (Unicode scalar values, not bytes)
//! - at least one uppercase letter
//! - at least one lowercase letter
//! - at least one decimal digit (Unicode category `Nd`)
//!
//! Letter case and digits are classified with Unicode semantics, so `Ñ`/`ñ`
//! count as letters and `٣` as a digit, while circled digits (`①`) and emoji
//! never satisfy a rule. Nothing else is restricted.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `cli` (default): Builds the `pwd-policy` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_MIN_LENGTH`: Minimum length used by [`PasswordPolicy::from_env`]
//!   (default: 8)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password, validate, PasswordPolicy, Verdict};
//! use secrecy::SecretString;
//!
//! assert!(validate("PassworD1"));
//! assert!(!validate("password1"));
//!
//! // Detailed evaluation
//! let password = SecretString::new("password1".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password(&password, &PasswordPolicy::default(), None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password(&password, &PasswordPolicy::default());
//!
//! assert_eq!(evaluation.verdict(), Verdict::Invalid);
//! for reason in evaluation.reasons() {
//!     println!("{reason}");
//! }
//! ```

// Internal modules
mod classify;
mod error;
mod evaluation;
mod evaluator;
mod policy;
mod sections;
mod value;

// Public API
pub use classify::{is_decimal_digit, CharClass};
pub use error::PolicyError;
pub use evaluation::{PolicyEvaluation, RuleViolation, Verdict};
pub use evaluator::evaluate_password;
pub use policy::{parse_min_length, validate, PasswordPolicy, MIN_LENGTH, MIN_LENGTH_ENV};
pub use value::{candidate_str, validate_value, validate_value_with};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
