use serde::{Deserialize, Deserializer};

/// Counters of a video as last reported by the service.
///
/// The service encodes counts as JSON strings; absent counters (e.g. likes on
/// a video with ratings disabled) read as zero.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSet {
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub dislike_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub favorite_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub comment_count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
