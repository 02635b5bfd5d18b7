//! Session handle issued by the remote account service.

use serde::Deserialize;

/// Opaque proof of authentication.
///
/// Issued by the account service on successful sign-up or sign-in and
/// handed back on sign-out. Nothing in this crate inspects the token;
/// it only travels between the service calls.
#[derive(Clone, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
