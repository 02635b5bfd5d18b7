//! Service container - wires the orchestrators to a backend client.
//!
//! One shared account-service client, one navigator, three
//! orchestrators. Everything is injected; nothing reaches for ambient
//! global state.

use std::sync::Arc;
use std::time::Duration;

use crate::client::{AccountService, SupabaseClient};
use crate::config::Config;

use super::navigation::Navigator;
use super::{Authenticator, Registrar, SessionTerminator};

/// Bundle of the three orchestrators sharing one backend client.
pub struct Services {
    registrar: Arc<Registrar>,
    auth: Arc<Authenticator>,
    session: Arc<SessionTerminator>,
}

impl Services {
    pub fn new(
        accounts: Arc<dyn AccountService>,
        navigator: Arc<dyn Navigator>,
        nav_delay: Duration,
    ) -> Self {
        Self {
            registrar: Arc::new(Registrar::new(
                accounts.clone(),
                navigator.clone(),
                nav_delay,
            )),
            auth: Arc::new(Authenticator::new(
                accounts.clone(),
                navigator.clone(),
                nav_delay,
            )),
            session: Arc::new(SessionTerminator::new(accounts, navigator)),
        }
    }

    /// Build the container against the hosted Supabase project.
    pub fn from_config(config: &Config, navigator: Arc<dyn Navigator>) -> Self {
        let accounts = Arc::new(SupabaseClient::from_config(config));
        Self::new(accounts, navigator, config.nav_delay())
    }

    /// Registration orchestrator
    pub fn registrar(&self) -> Arc<Registrar> {
        self.registrar.clone()
    }

    /// Authentication orchestrator
    pub fn auth(&self) -> Arc<Authenticator> {
        self.auth.clone()
    }

    /// Session terminator
    pub fn session(&self) -> Arc<SessionTerminator> {
        self.session.clone()
    }
}
