//! helixgate - Rate-limited Twitch Helix client
//!
//! An async client for the Twitch Helix REST API that self-throttles
//! against the server-imposed request quota. All callers of one client
//! share a single points-per-window request gate; a call that would
//! exceed the quota waits for the window to roll over instead of failing.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

use api::{GetStreamsResponse, GetUsersFollowsResponse, GetUsersResponse};
use client::{HttpClient, RateLimiter};
use config::{ClientConfig, Credentials};
use error::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::form_urlencoded;

/// Crate version, as reported to consumers
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quota points consumed by every current endpoint
const DEFAULT_COST: u32 = 1;

/// The main Helix client
///
/// Cheap to share behind an [`Arc`]; concurrent callers coordinate through
/// the built-in request gate.
pub struct HelixClient {
    /// API credentials, sent with every request
    credentials: Credentials,

    /// HTTP transport owning the shared request gate
    http_client: HttpClient,
}

impl HelixClient {
    /// Create a client with default configuration
    ///
    /// Stores both values verbatim; nothing is validated and no network
    /// call is made until the first fetch.
    pub fn new(client_id: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials::new(client_id, auth_token),
            ClientConfig::default(),
        )
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self {
            credentials,
            http_client: HttpClient::new(&config)?,
        })
    }

    /// Create a client with credentials from the environment
    ///
    /// Reads `TWITCH_CLIENT_ID` and `TWITCH_AUTH_TOKEN`, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Result<Self> {
        Self::with_config(Credentials::from_env()?, ClientConfig::default())
    }

    /// Get the shared request gate
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        self.http_client.rate_limiter()
    }

    /// Fetch live streams for the given user logins
    pub async fn get_streams(&self, user_logins: &[&str]) -> Result<GetStreamsResponse> {
        let endpoint = endpoint_with_query("streams", &repeated("user_login", user_logins));
        self.get(&endpoint).await
    }

    /// Fetch user records for the given logins
    pub async fn get_users(&self, user_logins: &[&str]) -> Result<GetUsersResponse> {
        let endpoint = endpoint_with_query("users", &repeated("login", user_logins));
        self.get(&endpoint).await
    }

    /// Fetch the follow edges originating from `user_id`
    pub async fn get_followers_from(&self, user_id: &str) -> Result<GetUsersFollowsResponse> {
        let endpoint = endpoint_with_query("users/follows", &[("from_id", user_id)]);
        self.get(&endpoint).await
    }

    /// Fetch the follow edges pointing at `user_id`
    pub async fn get_followers_to(&self, user_id: &str) -> Result<GetUsersFollowsResponse> {
        let endpoint = endpoint_with_query("users/follows", &[("to_id", user_id)]);
        self.get(&endpoint).await
    }

    /// Check whether `from_id` follows `to_id`
    ///
    /// The response's `total` is 1 when the relationship exists and 0
    /// otherwise.
    pub async fn get_follow_relationship(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<GetUsersFollowsResponse> {
        let endpoint = endpoint_with_query("users/follows", &[("from_id", from_id), ("to_id", to_id)]);
        self.get(&endpoint).await
    }

    /// Shared dispatch for all endpoint operations
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.http_client
            .get_json(endpoint, DEFAULT_COST, &self.credentials)
            .await
    }
}

/// Repeat `key` once per value, preserving input order
fn repeated<'a>(key: &'a str, values: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    values.iter().map(|value| (key, *value)).collect()
}

/// Join `path` and percent-encoded query pairs into an endpoint string
fn endpoint_with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }

    format!("{}?{}", path, query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelixError;
    use mockito::Matcher;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("helixgate=debug")
            .try_init();
    }

    fn test_client(base_url: String) -> HelixClient {
        HelixClient::with_config(
            Credentials::new("test-client-id", "test-token"),
            ClientConfig::default().with_base_url(base_url),
        )
        .unwrap()
    }

    #[test]
    fn test_streams_query_building() {
        assert_eq!(
            endpoint_with_query("streams", &repeated("user_login", &["alice", "bob"])),
            "streams?user_login=alice&user_login=bob"
        );
    }

    #[test]
    fn test_users_query_building() {
        assert_eq!(
            endpoint_with_query("users", &repeated("login", &["alice"])),
            "users?login=alice"
        );
    }

    #[test]
    fn test_follows_query_building() {
        assert_eq!(
            endpoint_with_query("users/follows", &[("from_id", "123")]),
            "users/follows?from_id=123"
        );
        assert_eq!(
            endpoint_with_query("users/follows", &[("from_id", "123"), ("to_id", "456")]),
            "users/follows?from_id=123&to_id=456"
        );
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        assert_eq!(
            endpoint_with_query("users", &[("login", "weird&login=x")]),
            "users?login=weird%26login%3Dx"
        );
    }

    #[tokio::test]
    async fn test_get_streams_decodes_response() {
        init_tracing();
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/streams")
            .match_query(Matcher::UrlEncoded("user_login".into(), "alice".into()))
            .match_header("Client-ID", "test-client-id")
            .match_header("Authorization", "Bearer test-token")
            .with_status(200)
            .with_body(
                r#"{
                    "data": [{
                        "id": "41375541868",
                        "user_id": "1234",
                        "user_name": "Alice",
                        "game_id": "494131",
                        "type": "live",
                        "title": "speedrun",
                        "viewer_count": 42,
                        "started_at": "2021-03-10T15:04:21Z",
                        "language": "en",
                        "thumbnail_url": "https://example.com/thumb-{width}x{height}.jpg"
                    }],
                    "pagination": {}
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client.get_streams(&["alice"]).await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].user_name, "Alice");
        assert_eq!(response.data[0].viewer_count, 42);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_users_decodes_response() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/users")
            .match_query(Matcher::UrlEncoded("login".into(), "twitchdev".into()))
            .with_status(200)
            .with_body(
                r#"{
                    "data": [{
                        "id": "141981764",
                        "login": "twitchdev",
                        "display_name": "TwitchDev",
                        "type": "",
                        "broadcaster_type": "partner",
                        "description": "",
                        "profile_image_url": "",
                        "offline_image_url": "",
                        "view_count": 5980557,
                        "created_at": "2016-12-14T20:32:28Z"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client.get_users(&["twitchdev"]).await.unwrap();

        assert_eq!(response.data[0].display_name, "TwitchDev");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_follow_relationship_sends_both_constraints() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/users/follows")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("from_id".into(), "123".into()),
                Matcher::UrlEncoded("to_id".into(), "456".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"total": 1, "data": [{
                "from_id": "123",
                "from_name": "alice",
                "to_id": "456",
                "to_name": "bob",
                "followed_at": "2017-08-22T22:55:24Z"
            }]}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let response = client.get_follow_relationship("123", "456").await.unwrap();

        assert_eq!(response.total, 1);
        assert_eq!(response.data[0].to_name, "bob");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_typed() {
        init_tracing();
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users/follows")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":"Unauthorized","status":401,"message":"Invalid OAuth token"}"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.get_followers_from("123").await.unwrap_err();

        match err {
            HelixError::Status {
                status,
                endpoint,
                body,
            } => {
                assert_eq!(status, 401);
                assert_eq!(endpoint, "users/follows?from_id=123");
                assert!(body.contains("Invalid OAuth token"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limited_status_is_typed() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/streams")
            .match_query(Matcher::Any)
            .with_status(429)
            .with_body("Too Many Requests")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.get_streams(&["alice"]).await.unwrap_err();

        assert!(matches!(err, HelixError::Status { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.get_users(&["alice"]).await.unwrap_err();

        assert!(matches!(err, HelixError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let client = test_client(server.url());
        let err = client.get_users(&["alice"]).await.unwrap_err();

        assert!(matches!(err, HelixError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_typed() {
        // Nothing listens here; the connection is refused immediately
        let client = test_client("http://127.0.0.1:1".to_string());
        let err = client.get_streams(&["alice"]).await.unwrap_err();

        assert!(matches!(
            err,
            HelixError::Request(_) | HelixError::Timeout(_)
        ));
    }

    #[tokio::test]
    async fn test_requests_consume_quota_points() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .expect(2)
            .create_async()
            .await;

        let client = test_client(server.url());
        client.get_users(&["alice"]).await.unwrap();
        client.get_users(&["bob"]).await.unwrap();

        assert_eq!(client.rate_limiter().used_points(), 2);
        assert_eq!(client.rate_limiter().max_points(), 800);
    }
}
