//! Error types.

use thiserror::Error;

/// Errors raised while resolving login or registration submissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The login number carried none of the recognized role markers.
    #[error("unrecognized login number: {entered:?}")]
    UnknownLoginNumber {
        /// The submitted login number, verbatim.
        entered: String,
    },
}

impl AccessError {
    /// Creates an unknown-login-number error.
    #[must_use]
    pub fn unknown(entered: impl Into<String>) -> Self {
        Self::UnknownLoginNumber {
            entered: entered.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = AccessError::unknown("1-000-000");
        assert_eq!(e.to_string(), "unrecognized login number: \"1-000-000\"");
    }
}
