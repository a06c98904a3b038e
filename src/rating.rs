use parse_display::{Display, FromStr};
use reqwest::Method;
use serde::Deserialize;

use crate::auth::Auth;
use crate::error::YtError;
use crate::request::{ApiRequest, Endpoint, Transport};

/// The authenticated viewer's opinion of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromStr, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Like,
    Dislike,
    #[serde(alias = "unspecified")]
    None,
}

#[derive(Debug, Deserialize)]
struct RatingListResponse {
    items: Vec<VideoRating>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoRating {
    video_id: String,
    rating: Rating,
}

/// `videos.getRating`
pub(crate) async fn fetch(transport: &dyn Transport, auth: &Auth, video_id: &str) -> Result<Rating, YtError> {
    let request = ApiRequest::get(Endpoint::Data, "videos/getRating")
        .query("id", video_id)
        .authorized(auth);
    let body = transport.send(request).await?;
    let resp: RatingListResponse = serde_json::from_str(&body)?;

    resp.items
        .into_iter()
        .find(|item| item.video_id == video_id)
        .map(|item| item.rating)
        .ok_or_else(|| YtError::NotFound(video_id.to_string()))
}

/// `videos.rate`
pub(crate) async fn update(transport: &dyn Transport, auth: &Auth, video_id: &str, rating: Rating) -> Result<(), YtError> {
    let request = ApiRequest::new(Method::POST, Endpoint::Data, "videos/rate")
        .query("id", video_id)
        .query("rating", rating.to_string())
        .authorized(auth);
    transport.send(request).await?;
    log::debug!("rated video {} as {}", video_id, rating);

    Ok(())
}
