//! Terminal result of one orchestrated user action.

use crate::errors::AppError;

/// Tagged success/failure result carrying the feedback text rendered
/// by the presentation layer. Nothing here outlives the interaction
/// that produced it.
#[derive(Debug)]
pub enum Outcome {
    Success { message: String },
    Failure { message: String, cause: AppError },
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Outcome::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>, cause: impl Into<AppError>) -> Self {
        Outcome::Failure {
            message: message.into(),
            cause: cause.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// User-facing feedback text.
    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message } | Outcome::Failure { message, .. } => message,
        }
    }

    /// Underlying error of a failed outcome.
    pub fn cause(&self) -> Option<&AppError> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { cause, .. } => Some(cause),
        }
    }

    /// Convert into a `Result` for callers that propagate failure,
    /// such as the CLI exit path.
    pub fn into_result(self) -> Result<String, AppError> {
        match self {
            Outcome::Success { message } => Ok(message),
            Outcome::Failure { cause, .. } => Err(cause),
        }
    }
}
