//! Command-line definition and the prompt/verdict loop.

use std::io::{BufRead, Write};

use clap::Parser;
use pwd_policy::{candidate_str, evaluate_password, parse_min_length, PasswordPolicy, PolicyError};
use secrecy::zeroize::{Zeroize, Zeroizing};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

pub const PROMPT: &str = "Enter your password: ";
pub const VALID_MESSAGE: &str = "password is correct";
pub const INVALID_MESSAGE: &str = "password is not correct";

/// Initial capacity of the line buffer; lines longer than this make
/// `read_line` grow the buffer, and the old allocation is not wiped.
const LINE_CAPACITY: usize = 256;

/// Checks a password against the composition policy
/// (8+ characters, uppercase, lowercase, digit).
#[derive(Debug, Parser)]
#[command(name = "pwd-policy", version, about, long_about = None)]
pub struct Cli {
    /// Read the input line as a JSON value; non-string values are rejected
    #[arg(long)]
    pub json: bool,

    /// Print every rule the password fails
    #[arg(long)]
    pub explain: bool,

    /// Minimum length (default: $PWD_POLICY_MIN_LENGTH, then 8)
    #[arg(long, value_parser = parse_min_length)]
    pub min_length: Option<usize>,
}

impl Cli {
    /// Resolves the policy: command line first, then environment, then default.
    pub fn policy(&self) -> Result<PasswordPolicy, PolicyError> {
        match self.min_length {
            Some(min_length) => Ok(PasswordPolicy::new(min_length)),
            None => PasswordPolicy::from_env(),
        }
    }

    /// Prompts on `output`, reads one line from `input` and prints the verdict.
    ///
    /// Returns the verdict. The verdict itself never produces an error; only
    /// I/O failures, bad configuration and (with `--json`) malformed or
    /// non-string input do.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool, PolicyError> {
        let policy = self.policy()?;

        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let candidate = self.read_candidate(input)?;
        let valid = policy.validate(candidate.expose_secret());

        writeln!(output, "{}", if valid { VALID_MESSAGE } else { INVALID_MESSAGE })?;

        if self.explain {
            #[cfg(feature = "async")]
            let evaluation = evaluate_password(&candidate, &policy, None);

            #[cfg(not(feature = "async"))]
            let evaluation = evaluate_password(&candidate, &policy);

            for reason in evaluation.reasons() {
                writeln!(output, "  - {}", reason)?;
            }
        }

        tracing::debug!("verdict: {}", valid);
        Ok(valid)
    }

    /// Reads one line into a `SecretString`.
    ///
    /// The line buffer and, with `--json`, the parsed string are wiped before
    /// returning; the secret is copied into an exact-size allocation first.
    fn read_candidate<R: BufRead>(&self, input: &mut R) -> Result<SecretString, PolicyError> {
        let mut line = Zeroizing::new(String::with_capacity(LINE_CAPACITY));
        input.read_line(&mut line)?;
        strip_line_terminator(&mut line);

        if !self.json {
            return Ok(take_secret(&mut line));
        }

        let mut value: Value = serde_json::from_str(&line)?;
        let candidate = candidate_str(&value).map(|c| SecretString::new(Box::from(c)));
        if let Value::String(s) = &mut value {
            s.zeroize();
        }
        candidate
    }
}

/// Copies `buf` into a `SecretString` and wipes `buf`, spare capacity included.
fn take_secret(buf: &mut String) -> SecretString {
    let secret = SecretString::new(Box::from(buf.as_str()));
    buf.zeroize();
    secret
}

fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
