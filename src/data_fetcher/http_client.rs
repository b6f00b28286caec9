//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

/// Header carrying the provider API key.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";

/// Header naming the provider host the key is scoped to. Requests routed
/// through the provider gateway are rejected without it.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Creates a properly configured HTTP client with connection pooling and
/// timeout handling. The provider key/host header pair is attached as
/// default headers so every request through this client is authenticated.
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();

    let key = HeaderValue::from_str(&config.api_key).map_err(|_| {
        AppError::config_error("API key contains characters not allowed in a header value")
    })?;
    headers.insert(API_KEY_HEADER, key);

    let host = api_host(&config.api_domain);
    let host = HeaderValue::from_str(host).map_err(|_| {
        AppError::config_error(format!(
            "API domain '{}' does not yield a valid host header",
            config.api_domain
        ))
    })?;
    headers.insert(API_HOST_HEADER, host);

    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Host portion of the configured API domain, scheme and path stripped:
/// `https://v3.football.api-sports.io/v3` becomes `v3.football.api-sports.io`.
fn api_host(api_domain: &str) -> &str {
    let without_scheme = api_domain
        .strip_prefix("https://")
        .or_else(|| api_domain.strip_prefix("http://"))
        .unwrap_or(api_domain);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
}
