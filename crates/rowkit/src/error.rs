//! Error types for the fallible conversions in rowkit.
//!
//! Label and container mismatches are rejected at compile time; the errors
//! here only cover the conversions that have to look at runtime data.

use thiserror::Error;

/// Error when building a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NonEmptyError {
    #[error("cannot build a non-empty sequence from an empty {context}")]
    Empty { context: &'static str },
}

/// Error when projecting a union value onto one of its labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("variant carries label `{found}`, expected `{expected}`")]
    LabelMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NonEmptyError::Empty { context: "Vec" };
        assert_eq!(
            err.to_string(),
            "cannot build a non-empty sequence from an empty Vec"
        );

        let err = ProjectError::LabelMismatch {
            expected: "ok",
            found: "error",
        };
        assert_eq!(err.to_string(), "variant carries label `error`, expected `ok`");
    }
}
