//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Remote account service
// =============================================================================

/// Table receiving one profile row per successful registration
pub const PROFILE_TABLE: &str = "usuarios";

/// Auth API path prefix on the Supabase project
pub const AUTH_PATH: &str = "/auth/v1";

/// Record store path prefix on the Supabase project
pub const REST_PATH: &str = "/rest/v1";

/// API key header sent with every request
pub const APIKEY_HEADER: &str = "apikey";

// =============================================================================
// Navigation
// =============================================================================

/// Delay before the post-success navigation fires
pub const DEFAULT_NAV_DELAY_SECS: u64 = 2;
