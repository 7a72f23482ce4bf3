//! API Module
//!
//! Typed response payloads for the Helix endpoints. Wire JSON uses
//! snake_case keys, which map directly onto the field names here.

pub mod follows;
pub mod streams;
pub mod users;

pub use follows::{Follow, GetUsersFollowsResponse};
pub use streams::{GetStreamsResponse, Stream};
pub use users::{GetUsersResponse, User};

use serde::{Deserialize, Serialize};

/// Pagination cursor attached to list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Opaque cursor for requesting the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}
