//! Password policy sections
//!
//! Each section checks a single rule of the policy.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_class_section;

use crate::evaluation::RuleViolation;

/// Result type for section functions.
/// - `Some(violation)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<RuleViolation>;
