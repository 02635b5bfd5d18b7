//! Login command - runs the authentication flow.

use std::sync::Arc;

use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::domain::Credentials;
use crate::errors::AppResult;
use crate::services::Services;

use super::{report, RouteLog};

/// Execute the login command
pub async fn execute(args: LoginArgs, config: Config) -> AppResult<()> {
    let services = Services::from_config(&config, Arc::new(RouteLog));
    let auth = services.auth();

    let outcome = auth
        .login(Credentials {
            email: args.email,
            password: args.password,
        })
        .await;

    report(&outcome);

    // Let the deferred navigation fire before the process exits.
    if let Some(nav) = auth.take_pending() {
        nav.wait().await;
    }

    // A failed flow exits nonzero.
    outcome.into_result().map(|_| ())
}
