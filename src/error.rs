//! Assertion failure types
//!
//! Every operation in this crate either returns silently (pass) or signals
//! one of the failures below. The `Display` output of each variant is the
//! exact text the enclosing test harness records against the failing test
//! case, so the formats here are load-bearing and must stay stable.

use thiserror::Error;

use crate::value::Value;

/// Outcome of a single assertion call
pub type Verdict = Result<(), AssertError>;

/// An expected-vs-actual mismatch discovered during a test.
///
/// These are assertion failures, not malfunctions of the comparator: there
/// is no recovery or retry, and a failure raised deep inside a recursive
/// comparison propagates up unmodified to be recorded exactly once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertError {
    /// Two leaf values (or a present/absent pair of keys) differ
    #[error("\nExpected: {expected} ({expected_type})\nActual: {actual} ({actual_type})")]
    ValueMismatch {
        expected: String,
        expected_type: &'static str,
        actual: String,
        actual_type: &'static str,
    },

    /// A key required directly on the instance is missing or only inherited
    #[error("Property '{key}' not found on object instance.")]
    KeyNotOwned { key: String },

    /// A key is absent from both the instance and its prototype chain
    #[error("Property '{key}' not found on object.")]
    KeyNotFound { key: String },

    /// An object expected to own nothing owns `count` enumerable properties
    #[error("Object owns {count} properties but should own none.")]
    UnexpectedKeys { count: usize },
}

impl AssertError {
    /// Mismatch between two values, capturing each side's rendering and type
    /// tag at the point of failure
    pub fn value_mismatch(expected: &Value, actual: &Value) -> Self {
        AssertError::ValueMismatch {
            expected: expected.to_string(),
            expected_type: expected.type_of(),
            actual: actual.to_string(),
            actual_type: actual.type_of(),
        }
    }

    /// A key the expected object owns but the actual object does not
    pub fn missing_key(expected: &Value) -> Self {
        Self::value_mismatch(expected, &Value::Undefined)
    }

    /// A key the actual object owns but the expected object does not
    pub fn extra_key(actual: &Value) -> Self {
        Self::value_mismatch(&Value::Undefined, actual)
    }

    pub fn key_not_owned(key: impl Into<String>) -> Self {
        AssertError::KeyNotOwned { key: key.into() }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        AssertError::KeyNotFound { key: key.into() }
    }

    pub fn unexpected_keys(count: usize) -> Self {
        AssertError::UnexpectedKeys { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mismatch_format() {
        let err = AssertError::value_mismatch(&Value::from("hi"), &Value::from("ho"));
        assert_eq!(err.to_string(), "\nExpected: hi (string)\nActual: ho (string)");
    }

    #[test]
    fn test_missing_and_extra_key_formats() {
        let err = AssertError::missing_key(&Value::from("rocks"));
        assert_eq!(
            err.to_string(),
            "\nExpected: rocks (string)\nActual: undefined (undefined)"
        );

        let err = AssertError::extra_key(&Value::from("rocks"));
        assert_eq!(
            err.to_string(),
            "\nExpected: undefined (undefined)\nActual: rocks (string)"
        );
    }

    #[test]
    fn test_ownership_formats() {
        assert_eq!(
            AssertError::key_not_owned("msg").to_string(),
            "Property 'msg' not found on object instance."
        );
        assert_eq!(
            AssertError::key_not_found("note").to_string(),
            "Property 'note' not found on object."
        );
        assert_eq!(
            AssertError::unexpected_keys(2).to_string(),
            "Object owns 2 properties but should own none."
        );
    }
}
