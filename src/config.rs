//! Client Configuration
//!
//! Tunables for the HTTP transport and the request quota, plus credential
//! sourcing from the environment.

use crate::error::{HelixError, Result};
use std::time::Duration;

/// Default base URL for the Helix API
pub const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/helix";

/// Environment variable holding the application client id
pub const CLIENT_ID_ENV: &str = "TWITCH_CLIENT_ID";

/// Environment variable holding the OAuth bearer token
pub const AUTH_TOKEN_ENV: &str = "TWITCH_AUTH_TOKEN";

/// Quota configuration for the request gate
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum points per window
    pub max_points: u32,

    /// Length of one quota window
    pub window: Duration,

    /// Sleep between quota re-checks while a reservation waits
    pub poll_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_points: 800,
            window: Duration::from_millis(60_000),
            poll_interval: Duration::from_millis(10),
        }
    }
}

/// Configuration for the Helix client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Quota configuration for the request gate
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the quota configuration
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

/// API credentials sent with every Helix request
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Application client id, sent as the `Client-ID` header
    pub client_id: String,

    /// OAuth bearer token
    pub auth_token: String,
}

impl Credentials {
    /// Create credentials from raw values
    pub fn new(client_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Load credentials from `TWITCH_CLIENT_ID` / `TWITCH_AUTH_TOKEN`.
    ///
    /// A `.env` file in the working directory is picked up when present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let client_id = std::env::var(CLIENT_ID_ENV)
            .map_err(|_| HelixError::Config(format!("{} is not set", CLIENT_ID_ENV)))?;
        let auth_token = std::env::var(AUTH_TOKEN_ENV)
            .map_err(|_| HelixError::Config(format!("{} is not set", AUTH_TOKEN_ENV)))?;

        Ok(Self {
            client_id,
            auth_token,
        })
    }
}
