//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of
//! concerns. The commands are presentation: they render outcome text
//! and log route changes, nothing more.

pub mod login;
pub mod logout;
pub mod signup;

use tracing::info;

use crate::domain::{Outcome, Route};
use crate::services::Navigator;

/// Navigator for the CLI: route changes become log lines instead of
/// screen transitions.
pub struct RouteLog;

impl Navigator for RouteLog {
    fn navigate(&self, route: Route) {
        info!(path = route.as_path(), "navigating");
    }
}

/// Render the outcome the way the screens rendered their feedback text.
pub(crate) fn report(outcome: &Outcome) {
    if outcome.is_success() {
        println!("{}", outcome.message());
    } else {
        eprintln!("{}", outcome.message());
    }
}
