//! Session terminator.
//!
//! Ends the current session and routes back to the entry screen. A
//! failed sign-out is logged rather than rendered; the user stays on
//! the current screen.

use std::sync::Arc;

use tracing::{error, info};

use crate::client::AccountService;
use crate::domain::{Outcome, Route};
use crate::errors::AppError;

use super::gate::Gate;
use super::navigation::Navigator;

/// Orchestrates the logout flow.
pub struct SessionTerminator {
    accounts: Arc<dyn AccountService>,
    navigator: Arc<dyn Navigator>,
    gate: Gate,
}

impl SessionTerminator {
    pub fn new(accounts: Arc<dyn AccountService>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            accounts,
            navigator,
            gate: Gate::new(),
        }
    }

    /// Run one logout attempt.
    ///
    /// Total: always returns an `Outcome`. Navigation back to the entry
    /// screen happens immediately on success, never on failure.
    pub async fn logout(&self) -> Outcome {
        let Some(_permit) = self.gate.try_enter() else {
            return Outcome::failure("operation already in progress", AppError::InFlight);
        };

        match self.accounts.sign_out().await {
            Ok(()) => {
                info!("signed out");
                self.navigator.navigate(Route::Login);
                Outcome::success("signed out")
            }
            Err(err) => {
                // Not shown to the user; the screen stays put.
                error!(error = %err, "sign-out failed");
                Outcome::failure("sign-out failed", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockAccountService;
    use crate::errors::AuthError;
    use crate::services::navigation::testing::RecordingNav;

    #[tokio::test]
    async fn successful_sign_out_navigates_to_entry_screen() {
        let mut accounts = MockAccountService::new();
        accounts.expect_sign_out().times(1).returning(|| Ok(()));
        let nav = Arc::new(RecordingNav::default());
        let terminator = SessionTerminator::new(Arc::new(accounts), nav.clone());

        let outcome = terminator.logout().await;

        assert!(outcome.is_success());
        assert_eq!(nav.routes(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn failed_sign_out_performs_no_navigation() {
        let mut accounts = MockAccountService::new();
        accounts.expect_sign_out().times(1).returning(|| {
            Err(AuthError::Rejected {
                status: 401,
                message: "invalid token".to_string(),
            })
        });
        let nav = Arc::new(RecordingNav::default());
        let terminator = SessionTerminator::new(Arc::new(accounts), nav.clone());

        let outcome = terminator.logout().await;

        assert!(!outcome.is_success());
        assert!(nav.routes().is_empty());
    }
}
