use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum YtError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("video no longer exists")]
    Deleted,

    #[error("video not found: {0}")]
    NotFound(String),

    #[error("request failed with status {status}: {body}")]
    IsNotSuccess { status: StatusCode, body: String },

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("invalid date")]
    InvalidDate(#[from] time::error::Parse),

    #[error(transparent)]
    Format(#[from] time::error::Format),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}
