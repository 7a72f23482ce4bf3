//! Client Module
//!
//! HTTP transport and request quota gating.

pub mod http;
pub mod rate_limiter;

pub use http::HttpClient;
pub use rate_limiter::RateLimiter;
