//! Validation of dynamically typed input.
//!
//! Callers holding untyped data (a JSON request body, a `--json` command line
//! argument) go through here: anything that is not a string is rejected with
//! [`PolicyError::InvalidInputType`] instead of being coerced.

use serde_json::Value;

use crate::error::PolicyError;
use crate::policy::PasswordPolicy;

/// Validates a dynamically typed value against the default policy.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidInputType`] if `value` is not a JSON string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
///
/// assert!(pwd_policy::validate_value(&json!("PassworD1")).unwrap());
/// assert!(pwd_policy::validate_value(&json!(123)).is_err());
/// ```
pub fn validate_value(value: &Value) -> Result<bool, PolicyError> {
    validate_value_with(&PasswordPolicy::default(), value)
}

/// Validates a dynamically typed value against `policy`.
pub fn validate_value_with(policy: &PasswordPolicy, value: &Value) -> Result<bool, PolicyError> {
    candidate_str(value).map(|candidate| policy.validate(candidate))
}

/// Borrows the candidate out of a dynamically typed value.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidInputType`] if `value` is not a JSON string.
pub fn candidate_str(value: &Value) -> Result<&str, PolicyError> {
    match value {
        Value::String(candidate) => Ok(candidate),
        other => {
            let found = json_type_name(other);
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected non-string password input: {}", found);
            Err(PolicyError::InvalidInputType { found })
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_value_string() {
        assert!(validate_value(&json!("PassworD1")).unwrap());
        assert!(validate_value(&json!("Contraseña123")).unwrap());
        assert!(!validate_value(&json!("Aa12345")).unwrap());
        assert!(!validate_value(&json!("")).unwrap());
    }

    #[test]
    fn test_validate_value_null() {
        let result = validate_value(&Value::Null);
        assert!(matches!(
            result,
            Err(PolicyError::InvalidInputType { found: "null" })
        ));
    }

    #[test]
    fn test_validate_value_number() {
        let result = validate_value(&json!(123));
        assert!(matches!(
            result,
            Err(PolicyError::InvalidInputType { found: "number" })
        ));
    }

    #[test]
    fn test_validate_value_array_of_chars() {
        let result = validate_value(&json!(["p", "a", "s", "s"]));
        assert!(matches!(
            result,
            Err(PolicyError::InvalidInputType { found: "array" })
        ));
    }

    #[test]
    fn test_validate_value_other_types() {
        assert!(matches!(
            validate_value(&json!(true)),
            Err(PolicyError::InvalidInputType { found: "boolean" })
        ));
        assert!(matches!(
            validate_value(&json!({"password": "PassworD1"})),
            Err(PolicyError::InvalidInputType { found: "object" })
        ));
    }

    #[test]
    fn test_validate_value_error_message() {
        let err = validate_value(&Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "Password must be a string, got null");
    }

    #[test]
    fn test_candidate_str() {
        let value = json!("Mi Password 123");
        assert_eq!(candidate_str(&value).unwrap(), "Mi Password 123");
        assert!(candidate_str(&json!([])).is_err());
    }

    #[test]
    fn test_validate_value_with_policy() {
        let policy = PasswordPolicy::new(12);
        assert!(!validate_value_with(&policy, &json!("Password123")).unwrap());
        assert!(validate_value_with(&policy, &json!("Password1234")).unwrap());
    }
}
