//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Cadastro - account sign-up, login and logout flows
#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and its profile record
    Signup(SignupArgs),

    /// Sign in with email and password
    Login(LoginArgs),

    /// End the current session
    Logout,
}

/// Arguments for the signup command
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Display name stored in the profile record
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Must match --password
    #[arg(long)]
    pub confirm_password: String,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}
