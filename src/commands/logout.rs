//! Logout command - ends the current session.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::Services;

use super::{report, RouteLog};

/// Execute the logout command
pub async fn execute(config: Config) -> AppResult<()> {
    let services = Services::from_config(&config, Arc::new(RouteLog));

    let outcome = services.session().logout().await;
    report(&outcome);

    // A failed flow exits nonzero.
    outcome.into_result().map(|_| ())
}
