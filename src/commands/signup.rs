//! Signup command - runs the registration flow.

use std::sync::Arc;

use crate::cli::args::SignupArgs;
use crate::config::Config;
use crate::domain::RegistrationInput;
use crate::errors::AppResult;
use crate::services::Services;

use super::{report, RouteLog};

/// Execute the signup command
pub async fn execute(args: SignupArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config, Arc::new(RouteLog));
    let registrar = services.registrar();

    let outcome = registrar
        .register(RegistrationInput {
            name: args.name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
        })
        .await;

    report(&outcome);

    // Let the deferred navigation fire before the process exits.
    if let Some(nav) = registrar.take_pending() {
        nav.wait().await;
    }

    // A failed flow exits nonzero.
    outcome.into_result().map(|_| ())
}
