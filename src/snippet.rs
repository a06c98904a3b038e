use std::collections::HashMap;

use serde::Deserialize;
use time::OffsetDateTime;
use url::Url;

/// Descriptive metadata of a video, the only partition `update` rewrites.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,

    /// `none`, `upcoming` or `live`.
    pub live_broadcast_content: Option<String>,

    #[serde(default, deserialize_with = "time::serde::rfc3339::option::deserialize")]
    pub published_at: Option<OffsetDateTime>,

    #[serde(default)]
    pub thumbnails: HashMap<String, Thumbnail>,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thumbnail {
    pub url: Url,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Snippet {
    /// URL of the thumbnail of the given size (`default`, `medium`, `high`,
    /// `standard`, `maxres`).
    pub fn thumbnail_url(&self, size: &str) -> Option<&Url> {
        self.thumbnails.get(size).map(|t| &t.url)
    }
}
