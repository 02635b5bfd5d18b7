//! End-to-end flow tests: orchestrators driving the real REST client
//! against a mock server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use cadastro::client::SupabaseClient;
use cadastro::domain::{Credentials, RegistrationInput, Route};
use cadastro::services::{Navigator, Services};

/// Navigator that records route changes for assertions.
#[derive(Default)]
struct RecordingNav {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNav {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("routes lock").clone()
    }
}

impl Navigator for RecordingNav {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("routes lock").push(route);
    }
}

fn services_for(server: &MockServer) -> (Services, Arc<RecordingNav>) {
    let nav = Arc::new(RecordingNav::default());
    let accounts = Arc::new(SupabaseClient::new(server.base_url(), "anon-key"));
    // Short delay keeps the tests fast; the delay semantics themselves
    // are covered by the unit tests with a paused clock.
    let services = Services::new(accounts, nav.clone(), Duration::from_millis(10));
    (services, nav)
}

fn session_body() -> serde_json::Value {
    json!({
        "access_token": "tok-123",
        "token_type": "bearer",
        "expires_in": 3600
    })
}

fn registration() -> RegistrationInput {
    RegistrationInput {
        name: "Maria".to_string(),
        email: "maria@example.com".to_string(),
        password: "secret123".to_string(),
        confirm_password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn register_creates_account_writes_profile_and_navigates() {
    let server = MockServer::start();
    let signup = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/signup")
            .json_body(json!({"email": "maria@example.com", "password": "secret123"}));
        then.status(200).json_body(session_body());
    });
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/usuarios")
            .json_body(json!({"nome": "Maria", "email": "maria@example.com"}));
        then.status(201);
    });

    let (services, nav) = services_for(&server);
    let registrar = services.registrar();

    let outcome = registrar.register(registration()).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "registration completed");

    registrar
        .take_pending()
        .expect("pending navigation")
        .wait()
        .await;

    signup.assert();
    insert.assert();
    assert_eq!(nav.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn register_with_failing_insert_reports_and_skips_navigation() {
    let server = MockServer::start();
    let signup = server.mock(|when, then| {
        when.method(POST).path("/auth/v1/signup");
        then.status(200).json_body(session_body());
    });
    let insert = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/usuarios");
        then.status(403)
            .json_body(json!({"message": "permission denied"}));
    });

    let (services, nav) = services_for(&server);
    let registrar = services.registrar();

    let outcome = registrar.register(registration()).await;
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "error saving information: permission denied");

    // Exactly one call each: account creation happened, nothing rolled
    // it back.
    signup.assert_hits(1);
    insert.assert_hits(1);
    assert!(nav.routes().is_empty());
    assert!(registrar.take_pending().is_none());
}

#[tokio::test]
async fn register_with_invalid_input_makes_no_requests() {
    let server = MockServer::start();

    let (services, nav) = services_for(&server);
    let mut input = registration();
    input.confirm_password = "different".to_string();

    let outcome = services.registrar().register(input).await;
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "passwords do not match");
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn login_then_logout_round_trip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "password");
        then.status(200).json_body(session_body());
    });
    let logout = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/logout")
            .header("authorization", "Bearer tok-123");
        then.status(204);
    });

    let (services, nav) = services_for(&server);
    let auth = services.auth();

    let outcome = auth
        .login(Credentials {
            email: "maria@example.com".to_string(),
            password: "secret123".to_string(),
        })
        .await;
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "login successful");

    auth.take_pending()
        .expect("pending navigation")
        .wait()
        .await;
    assert_eq!(nav.routes(), vec![Route::Home]);

    let outcome = services.session().logout().await;
    assert!(outcome.is_success());
    logout.assert();
    assert_eq!(nav.routes(), vec![Route::Home, Route::Login]);
}

#[tokio::test]
async fn failed_login_surfaces_service_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400)
            .json_body(json!({"error_description": "Invalid login credentials"}));
    });

    let (services, nav) = services_for(&server);
    let outcome = services
        .auth()
        .login(Credentials {
            email: "maria@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "login error: Invalid login credentials");
    assert!(nav.routes().is_empty());
}
