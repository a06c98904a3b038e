use std::time::Duration;

use url::Url;

use crate::error::YtError;

const DATA_API_URL: &str = "https://www.googleapis.com/youtube/v3/";
const ANALYTICS_API_URL: &str = "https://youtubeanalytics.googleapis.com/v2/";
const ANNOTATIONS_URL: &str = "https://www.youtube.com/";

/// Where and how [`HttpTransport`](crate::HttpTransport) talks to the service.
///
/// Base URLs must end with `/`, paths of requests are joined onto them.
#[readonly::make]
#[derive(Debug, Clone)]
pub struct Config {
    pub data_api_url: Url,
    pub analytics_api_url: Url,
    pub annotations_url: Url,

    /// Sent as `key` on requests that carry no access token.
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_api_url: Url::parse(DATA_API_URL).expect("valid url"),
            analytics_api_url: Url::parse(ANALYTICS_API_URL).expect("valid url"),
            annotations_url: Url::parse(ANNOTATIONS_URL).expect("valid url"),
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Reads `YT_API_KEY`, `YT_DATA_API_URL`, `YT_ANALYTICS_API_URL`,
    /// `YT_ANNOTATIONS_URL`, `YT_USER_AGENT` and `YT_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, YtError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, YtError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("YT_DATA_API_URL") {
            config.data_api_url = base_url(&url)?;
        }
        if let Some(url) = lookup("YT_ANALYTICS_API_URL") {
            config.analytics_api_url = base_url(&url)?;
        }
        if let Some(url) = lookup("YT_ANNOTATIONS_URL") {
            config.annotations_url = base_url(&url)?;
        }
        config.api_key = lookup("YT_API_KEY");
        config.user_agent = lookup("YT_USER_AGENT");
        if let Some(secs) = lookup("YT_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>()
                .map_err(|_| YtError::InvalidTimeout(secs.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_data_api_url(mut self, url: &str) -> Result<Self, YtError> {
        self.data_api_url = base_url(url)?;
        Ok(self)
    }

    pub fn with_analytics_api_url(mut self, url: &str) -> Result<Self, YtError> {
        self.analytics_api_url = base_url(url)?;
        Ok(self)
    }

    pub fn with_annotations_url(mut self, url: &str) -> Result<Self, YtError> {
        self.annotations_url = base_url(url)?;
        Ok(self)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// `Url::join` drops the last segment unless the base ends with a slash.
fn base_url(url: &str) -> Result<Url, YtError> {
    if url.ends_with('/') {
        Ok(Url::parse(url)?)
    } else {
        Ok(Url::parse(&format!("{}/", url))?)
    }
}
