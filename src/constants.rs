//! Application-wide constants and configuration defaults
//!
//! This module centralizes magic numbers and default values so the rest of
//! the codebase stays configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Lowercased name fragments that mark a competition as women's football.
/// "fem" deliberately covers "Femenina", "Féminine", "Feminino" and friends.
pub const WOMENS_NAME_TOKENS: &[&str] = &["women", "fem"];

/// Curated competition ids that are always eligible regardless of name.
/// Treated as configuration data; this is only the shipped default.
pub const DEFAULT_ALLOWED_COMPETITION_IDS: &[u32] = &[44, 82, 1130, 1117, 904];

/// Country bucket used when a fixture carries no country information
pub const FALLBACK_COUNTRY: &str = "Other";

/// Competition id bucket used when a fixture carries no league id
pub const FALLBACK_COMPETITION_ID: u32 = 0;

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "MATCHBOARD_API_DOMAIN";

    /// Environment variable for API key override
    pub const API_KEY: &str = "MATCHBOARD_API_KEY";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "MATCHBOARD_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "MATCHBOARD_HTTP_TIMEOUT";

    /// Environment variable for the IANA timezone forwarded to the provider
    pub const TIMEZONE: &str = "MATCHBOARD_TIMEZONE";
}

/// Retry configuration for transient API failures
pub mod retry {
    /// Maximum number of retry attempts for API calls
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}
