//! Evaluation result types.

use std::fmt;

use crate::classify::CharClass;

/// A single rule the candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    /// Fewer characters than the policy's minimum.
    TooShort { min: usize, actual: usize },
    /// No character of the given class.
    Missing(CharClass),
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::TooShort { min, .. } => {
                write!(f, "Password must be at least {} characters", min)
            }
            RuleViolation::Missing(class) => {
                write!(f, "Password must contain at least one {}", class)
            }
        }
    }
}

/// Outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// The evaluation was cancelled before every section ran.
    NotEvaluated,
}

/// Detailed result of evaluating a password against a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEvaluation {
    pub violations: Vec<RuleViolation>,
    pub cancelled: bool,
}

impl PolicyEvaluation {
    pub fn verdict(&self) -> Verdict {
        if self.cancelled {
            Verdict::NotEvaluated
        } else if self.violations.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }

    /// `true` only for a completed evaluation with no violations.
    pub fn is_valid(&self) -> bool {
        self.verdict() == Verdict::Valid
    }

    /// Human-readable reasons, one per violation.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
