//! Domain layer - Core types of the account flows
//!
//! Form inputs, the session handle issued by the remote service, the
//! profile record written on registration, navigation routes, and the
//! terminal outcome every orchestration produces. No infrastructure
//! concerns live here.

pub mod input;
pub mod outcome;
pub mod profile;
pub mod route;
pub mod session;

pub use input::{Credentials, RegistrationInput};
pub use outcome::Outcome;
pub use profile::ProfileRecord;
pub use route::Route;
pub use session::Session;
