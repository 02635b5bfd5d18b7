//! Registration orchestrator.
//!
//! Sequences form validation, account creation, and the profile-record
//! insert into one user-facing outcome, then schedules the navigation
//! back to the login screen.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::client::AccountService;
use crate::config::PROFILE_TABLE;
use crate::domain::{Outcome, ProfileRecord, RegistrationInput, Route};
use crate::errors::{AppError, AuthError, StoreError};

use super::gate::Gate;
use super::navigation::{NavSlot, Navigator, ScheduledNav};

/// Orchestrates the sign-up flow.
pub struct Registrar {
    accounts: Arc<dyn AccountService>,
    navigator: Arc<dyn Navigator>,
    nav_delay: Duration,
    gate: Gate,
    pending: NavSlot,
}

impl Registrar {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        navigator: Arc<dyn Navigator>,
        nav_delay: Duration,
    ) -> Self {
        Self {
            accounts,
            navigator,
            nav_delay,
            gate: Gate::new(),
            pending: NavSlot::new(),
        }
    }

    /// Run one registration attempt.
    ///
    /// Total: always returns an `Outcome`, never propagates an error.
    /// Performs at most one account-creation call and at most one
    /// record insert, both only after validation passes.
    pub async fn register(&self, input: RegistrationInput) -> Outcome {
        let Some(_permit) = self.gate.try_enter() else {
            return Outcome::failure("operation already in progress", AppError::InFlight);
        };

        if let Err(err) = input.validate() {
            return Outcome::failure(err.to_string(), err);
        }

        if let Err(err) = self.accounts.sign_up(&input.email, &input.password).await {
            return match err {
                AuthError::Rejected { .. } => {
                    Outcome::failure(format!("signup error: {err}"), err)
                }
                other => {
                    error!(error = %other, "sign-up did not complete");
                    Outcome::failure("unexpected error", other)
                }
            };
        }

        let record = match serde_json::to_value(ProfileRecord::from(&input)) {
            Ok(value) => value,
            Err(err) => {
                error!(error = %err, "profile record did not serialize");
                return Outcome::failure("unexpected error", AppError::unexpected(err.to_string()));
            }
        };

        if let Err(err) = self.accounts.insert(PROFILE_TABLE, record).await {
            return match err {
                StoreError::Rejected { .. } => {
                    // The account now exists without a profile row.
                    // Nothing here compensates; reconciliation is an
                    // out-of-band concern.
                    warn!(email = %input.email, "account created but profile insert failed");
                    Outcome::failure(format!("error saving information: {err}"), err)
                }
                other => {
                    error!(error = %other, "profile insert did not complete");
                    Outcome::failure("unexpected error", other)
                }
            };
        }

        info!(email = %input.email, "registration completed");
        self.pending.put(ScheduledNav::after(
            self.navigator.clone(),
            Route::Login,
            self.nav_delay,
        ));
        Outcome::success("registration completed")
    }

    /// Pending post-success navigation, if one is scheduled.
    pub fn take_pending(&self) -> Option<ScheduledNav> {
        self.pending.take()
    }

    /// Cancel a pending navigation (screen teardown).
    pub fn cancel_pending(&self) {
        self.pending.cancel()
    }
}
