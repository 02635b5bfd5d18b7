//! Cadastro - account registration, login and logout flows
//!
//! Orchestrates the multi-step account flows of a Supabase-backed
//! application: form validation, account creation, profile-record
//! persistence, session establishment and termination, and the
//! deferred navigation that follows a successful flow.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core types (inputs, outcomes, session, routes)
//! - **client**: Remote account service boundary (Supabase REST)
//! - **services**: The orchestrators
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create an account
//! cargo run -- signup --name Maria --email maria@example.com \
//!     --password secret123 --confirm-password secret123
//!
//! # Sign in
//! cargo run -- login --email maria@example.com --password secret123
//!
//! # Sign out
//! cargo run -- logout
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use client::{AccountService, SupabaseClient};
pub use config::Config;
pub use domain::{Credentials, Outcome, ProfileRecord, RegistrationInput, Route, Session};
pub use errors::{AppError, AppResult, AuthError, StoreError, ValidationError};
pub use services::{Authenticator, Navigator, Registrar, Services, SessionTerminator};
