//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::DEFAULT_NAV_DELAY_SECS;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub supabase_url: String,
    anon_key: String,
    pub nav_delay_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("anon_key", &"[REDACTED]")
            .field("nav_delay_secs", &self.nav_delay_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if `SUPABASE_URL` or `SUPABASE_ANON_KEY` is not set; the
    /// client cannot reach the hosted project without them.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let supabase_url = env::var("SUPABASE_URL")
            .expect("SUPABASE_URL environment variable must be set");
        let anon_key = env::var("SUPABASE_ANON_KEY")
            .expect("SUPABASE_ANON_KEY environment variable must be set");

        Self {
            supabase_url,
            anon_key,
            nav_delay_secs: env::var("NAV_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NAV_DELAY_SECS),
        }
    }

    /// Anonymous API key for the hosted project.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Delay applied to post-success navigations.
    pub fn nav_delay(&self) -> Duration {
        Duration::from_secs(self.nav_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_anon_key() {
        let config = Config {
            supabase_url: "https://project.supabase.co".to_string(),
            anon_key: "anon-secret".to_string(),
            nav_delay_secs: 2,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("anon-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
