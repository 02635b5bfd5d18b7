//! Supabase REST client implementing the account service boundary.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{Config, APIKEY_HEADER, AUTH_PATH, REST_PATH};
use crate::domain::Session;
use crate::errors::{AuthError, StoreError};

use super::AccountService;

/// Error body shapes returned by the auth and rest endpoints.
///
/// The auth API answers with `msg` or `error_description`, the record
/// store with `message`; older endpoints use a bare `error` field.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self, status: StatusCode) -> String {
        self.msg
            .or(self.error_description)
            .or(self.message)
            .or(self.error)
            .unwrap_or_else(|| format!("request failed with status {status}"))
    }
}

/// Client for one hosted Supabase project.
///
/// Owns the single current session: set on successful sign-up or
/// sign-in, cleared on sign-out. Callers only reach the session through
/// the `AccountService` operations and never mutate it directly.
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
    session: RwLock<Option<Session>>,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            anon_key: anon_key.into(),
            session: RwLock::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.supabase_url.clone(), config.anon_key())
    }

    /// Session currently held, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_session(&self, session: Session) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    fn clear_session(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// POST to an auth endpoint and decode the session on success.
    async fn auth_post(&self, path_and_query: &str, body: &Value) -> Result<Session, AuthError> {
        let url = format!("{}{}{}", self.base_url, AUTH_PATH, path_and_query);
        let response = self
            .http
            .post(&url)
            .header(APIKEY_HEADER, &self.anon_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, message) = read_error(response).await;
            return Err(AuthError::Rejected { status, message });
        }

        let session = response.json::<Session>().await?;
        Ok(session)
    }
}

/// Drain a non-2xx response into its status and service message.
async fn read_error(response: Response) -> (u16, String) {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.into_message(status),
        Err(_) => format!("request failed with status {status}"),
    };
    (status.as_u16(), message)
}

#[async_trait]
impl AccountService for SupabaseClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        debug!(email, "creating account");
        let body = serde_json::json!({ "email": email, "password": password });
        let session = self.auth_post("/signup", &body).await?;
        self.store_session(session.clone());
        Ok(session)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        debug!(email, "signing in");
        let body = serde_json::json!({ "email": email, "password": password });
        let session = self.auth_post("/token?grant_type=password", &body).await?;
        self.store_session(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        debug!("signing out");
        let url = format!("{}{}/logout", self.base_url, AUTH_PATH);
        let mut request = self.http.post(&url).header(APIKEY_HEADER, &self.anon_key);
        if let Some(session) = self.current_session() {
            request = request.bearer_auth(&session.access_token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let (status, message) = read_error(response).await;
            return Err(AuthError::Rejected { status, message });
        }

        self.clear_session();
        Ok(())
    }

    async fn insert(&self, table: &str, record: Value) -> Result<(), StoreError> {
        debug!(table, "inserting record");
        let url = format!("{}{}/{}", self.base_url, REST_PATH, table);
        let mut request = self
            .http
            .post(&url)
            .header(APIKEY_HEADER, &self.anon_key)
            .header("Prefer", "return=minimal")
            .json(&record);
        if let Some(session) = self.current_session() {
            request = request.bearer_auth(&session.access_token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let (status, message) = read_error(response).await;
            return Err(StoreError::Rejected { status, message });
        }

        Ok(())
    }
}
