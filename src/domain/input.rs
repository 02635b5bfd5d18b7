//! Form input types collected by the presentation layer.

use crate::errors::ValidationError;

/// Login form credentials.
///
/// Transient: held only for the duration of one sign-in attempt, never
/// persisted by this crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up form input.
#[derive(Debug, Clone)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationInput {
    /// Validate the form before any remote call is attempted.
    ///
    /// Checks run in order and short-circuit on the first failure:
    /// all four fields must be non-empty, then the two passwords must
    /// match.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::FieldsRequired);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}
