//! Password policy evaluator - runs every section and collects violations.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classify::CharClass;
use crate::evaluation::PolicyEvaluation;
use crate::policy::PasswordPolicy;
use crate::sections::{character_class_section, length_section, SectionResult};

/// Delay before an async evaluation starts, so keystroke-driven callers can
/// cancel a stale request before any work is done.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
enum Section {
    Length,
    Class(CharClass),
}

const SECTIONS: [Section; 4] = [
    Section::Length,
    Section::Class(CharClass::Uppercase),
    Section::Class(CharClass::Lowercase),
    Section::Class(CharClass::Digit),
];

impl Section {
    fn run(self, password: &str, policy: &PasswordPolicy) -> SectionResult {
        match self {
            Section::Length => length_section(password, policy),
            Section::Class(class) => character_class_section(password, class),
        }
    }
}

/// Evaluates a password against `policy` and reports every violated rule.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - The rules to apply
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PolicyEvaluation` whose verdict matches [`PasswordPolicy::validate`],
/// or `Verdict::NotEvaluated` if the token fired first.
pub fn evaluate_password(
    password: &SecretString,
    policy: &PasswordPolicy,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PolicyEvaluation {
    let pwd = password.expose_secret();
    let mut evaluation = PolicyEvaluation::default();

    for section in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section {:?}", section);
                    evaluation.cancelled = true;
                    break;
                }
            }
        }

        if let Some(violation) = section.run(pwd, policy) {
            evaluation.violations.push(violation);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Evaluated password of {} chars: {} violation(s), verdict {:?}",
        pwd.chars().count(),
        evaluation.violations.len(),
        evaluation.verdict()
    );

    evaluation
}

/// Async version that sends the evaluation result via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    policy: PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password(password, &policy, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
