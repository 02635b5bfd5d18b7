//! Authentication orchestrator.
//!
//! One sign-in call per invocation, no retry; success schedules the
//! navigation to the home screen.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::client::AccountService;
use crate::domain::{Credentials, Outcome, Route};
use crate::errors::{AppError, AuthError};

use super::gate::Gate;
use super::navigation::{NavSlot, Navigator, ScheduledNav};

/// Orchestrates the login flow.
pub struct Authenticator {
    accounts: Arc<dyn AccountService>,
    navigator: Arc<dyn Navigator>,
    nav_delay: Duration,
    gate: Gate,
    pending: NavSlot,
}

impl Authenticator {
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

    /// Run one login attempt.
    ///
    /// Total: always returns an `Outcome`. No state carries over
    /// between invocations beyond the session held by the account
    /// service itself.
    pub async fn login(&self, credentials: Credentials) -> Outcome {
        let Some(_permit) = self.gate.try_enter() else {
            return Outcome::failure("operation already in progress", AppError::InFlight);
        };

        match self
            .accounts
            .sign_in_with_password(&credentials.email, &credentials.password)
            .await
        {
            Ok(_session) => {
                info!(email = %credentials.email, "login successful");
                self.pending.put(ScheduledNav::after(
                    self.navigator.clone(),
                    Route::Home,
                    self.nav_delay,
                ));
                Outcome::success("login successful")
            }
            Err(err @ AuthError::Rejected { .. }) => {
                Outcome::failure(format!("login error: {err}"), err)
            }
            Err(other) => {
                error!(error = %other, "sign-in did not complete");
                Outcome::failure("unexpected error, try again later", other)
            }
        }
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
