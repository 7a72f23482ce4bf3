//! HTTP Client
//!
//! Async HTTP dispatch with quota gating and typed status handling.

use crate::client::rate_limiter::RateLimiter;
use crate::config::{ClientConfig, Credentials};
use crate::error::{HelixError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Header carrying the application client id
const CLIENT_ID_HEADER: &str = "Client-ID";

/// HTTP client with quota gating
pub struct HttpClient {
    /// Inner reqwest client
    client: Client,

    /// Base URL requests are dispatched against, without a trailing slash
    base_url: String,

    /// Shared request gate
    rate_limiter: Arc<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| HelixError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
        })
    }

    /// Get the request gate
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Perform an authenticated GET for `endpoint` and decode the JSON body.
    ///
    /// Reserves `cost` quota points before dispatching, suspending while the
    /// quota is exhausted. Success is exactly status 200; every other status
    /// is reported uniformly as [`HelixError::Status`].
    pub async fn get_json<T>(
        &self,
        endpoint: &str,
        cost: u32,
        credentials: &Credentials,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.reserve(cost).await?;

        let url = format!("{}/{}", self.base_url, endpoint);
        let headers = auth_headers(credentials)?;

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint, error = %e, "helix request failed");
                HelixError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!(
                endpoint,
                status = status.as_u16(),
                body = %body,
                "helix returned a non-success status"
            );
            return Err(HelixError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                body,
            });
        }

        tracing::debug!(endpoint, "helix request succeeded");

        serde_json::from_str(&body).map_err(|e| {
            HelixError::Decode(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                &body[..body.len().min(500)]
            ))
        })
    }
}

/// Build the `Client-ID` and `Authorization` headers for a request
fn auth_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        CLIENT_ID_HEADER,
        HeaderValue::from_str(&credentials.client_id)
            .map_err(|e| HelixError::Config(format!("Invalid client id: {}", e)))?,
    );
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", credentials.auth_token))
            .map_err(|e| HelixError::Config(format!("Invalid auth token: {}", e)))?,
    );

    Ok(headers)
}
