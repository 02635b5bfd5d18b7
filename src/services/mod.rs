//! Application services layer - the orchestrators.
//!
//! Each orchestrator sequences one or more remote calls into a single
//! user-facing outcome. They depend on the `AccountService` and
//! `Navigator` abstractions for dependency inversion, enforce
//! at-most-one-in-flight per orchestrator, and own the deferred
//! navigation that follows a successful flow.

mod authentication;
pub mod container;
mod gate;
pub mod navigation;
mod registration;
mod session;

pub use authentication::Authenticator;
pub use container::Services;
pub use navigation::{Navigator, ScheduledNav};
pub use registration::Registrar;
pub use session::SessionTerminator;
