//! Stream Payloads
//!
//! Response types for the `streams` endpoint.

use crate::api::Pagination;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live stream as reported by Helix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    /// Stream id
    pub id: String,

    /// Broadcaster's user id
    pub user_id: String,

    /// Broadcaster's display name
    pub user_name: String,

    /// Id of the category or game being played
    pub game_id: String,

    /// Stream type: "live", or an empty string in case of error
    #[serde(rename = "type")]
    pub stream_type: String,

    /// Stream title
    pub title: String,

    /// Current viewer count
    pub viewer_count: u64,

    /// When the stream went live
    pub started_at: DateTime<Utc>,

    /// Broadcast language (ISO 639-1 code)
    pub language: String,

    /// Thumbnail URL template with `{width}`/`{height}` placeholders
    pub thumbnail_url: String,
}

/// Response shape of `GET streams`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStreamsResponse {
    /// Streams matching the query, highest viewer count first
    pub data: Vec<Stream>,

    /// Cursor for the next result page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}
