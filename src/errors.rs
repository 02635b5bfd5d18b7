//! Centralized error handling.
//!
//! One variant family per failure class the orchestrators can see:
//! local validation, rejection by the remote account service, rejection
//! by the record store, and transport failures that surface as the
//! generic "unexpected" outcome.

use thiserror::Error;

/// Local validation failures, detected before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("all fields required")]
    FieldsRequired,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Errors from the auth endpoints of the remote account service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service handled the request and turned it down.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The exchange never completed: connection failure, timeout, or a
    /// response body that did not decode.
    #[error("transport: {0}")]
    Transport(String),
}

impl AuthError {
    /// Whether the service itself rejected the request, as opposed to
    /// the request never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected { .. })
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

/// Errors from the record store of the remote account service.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store handled the insert and turned it down.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The exchange never completed.
    #[error("transport: {0}")]
    Transport(String),
}

impl StoreError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Rejected { .. })
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Umbrella error carried as the cause of a failed outcome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A second invocation arrived while one was still outstanding.
    #[error("operation already in progress")]
    InFlight,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn unexpected(msg: impl Into<String>) -> Self {
        AppError::Unexpected(msg.into())
    }
}
