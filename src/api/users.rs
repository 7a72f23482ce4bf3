//! User Payloads
//!
//! Response types for the `users` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account as reported by Helix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: String,

    /// Login name (lowercase)
    pub login: String,

    /// Display name
    pub display_name: String,

    /// User type: "staff", "admin", "global_mod", or empty
    #[serde(rename = "type")]
    pub user_type: String,

    /// Broadcaster type: "partner", "affiliate", or empty
    pub broadcaster_type: String,

    /// Channel description
    pub description: String,

    /// Profile image URL
    pub profile_image_url: String,

    /// Offline channel banner URL
    pub offline_image_url: String,

    /// Total channel view count
    pub view_count: u64,

    /// Account creation time
    pub created_at: DateTime<Utc>,

    /// Verified email, only present with the `user:read:email` scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response shape of `GET users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUsersResponse {
    /// Users matching the query
    pub data: Vec<User>,
}
