//! Errors surfaced by the evaluation engine.

use thiserror::Error;

/// The only error an evaluation can fail with.
///
/// Everything else (DNS failures, timeouts) is folded into the itemized check
/// list, because a host that does not resolve is itself a risk signal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    /// The input could not be turned into an absolute URL.
    #[error("Invalid URL: {reason}")]
    InvalidUrl {
        /// The raw input exactly as given (before trimming).
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl EvaluateError {
    pub(crate) fn invalid(input: &str, reason: impl Into<String>) -> Self {
        EvaluateError::InvalidUrl {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
