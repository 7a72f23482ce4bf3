//! Follow Payloads
//!
//! Response types for the `users/follows` endpoint.

use crate::api::Pagination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed follow edge between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    /// Id of the following user
    pub from_id: String,

    /// Display name of the following user
    pub from_name: String,

    /// Id of the followed user
    pub to_id: String,

    /// Display name of the followed user
    pub to_name: String,

    /// When the follow happened
    pub followed_at: DateTime<Utc>,
}

/// Response shape of `GET users/follows`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUsersFollowsResponse {
    /// Total number of matching follow relationships
    pub total: u64,

    /// The follow edges on this page, most recent first
    pub data: Vec<Follow>,

    /// Cursor for the next result page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}
