//! Remote account service boundary.
//!
//! The orchestrators depend on the `AccountService` trait only; the
//! hosted Supabase implementation lives in `supabase`. Injecting the
//! trait keeps the backend substitutable with a test double.

mod supabase;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Session;
use crate::errors::{AuthError, StoreError};

#[cfg(test)]
use mockall::automock;

pub use supabase::SupabaseClient;

/// Capability set of the hosted backend the orchestrators call into.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account with the given credentials.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Authenticate with email and password.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Insert a record into the named table of the record store.
    async fn insert(&self, table: &str, record: Value) -> Result<(), StoreError>;
}
