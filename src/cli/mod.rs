//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `signup` - Run the registration flow
//! - `login` - Run the authentication flow
//! - `logout` - End the current session

pub mod args;

pub use args::{Cli, Commands};
