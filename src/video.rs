use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use time::OffsetDateTime;
use tokio::sync::OnceCell;
use url::Url;

use crate::annotation::{self, Annotation};
use crate::auth::Auth;
use crate::content_detail::ContentDetail;
use crate::error::YtError;
use crate::rating::{self, Rating};
use crate::report::{fetch_report, DateRange, Metric, ReportParams, TimeSeries};
use crate::request::{ApiRequest, Endpoint, Transport};
use crate::snippet::Snippet;
use crate::statistics::StatisticsSet;
use crate::status::Status;

/// A `video` resource as returned by `videos.list`, with whichever parts
/// were requested.
#[readonly::make]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub status: Option<Status>,
    pub content_details: Option<ContentDetail>,
    pub statistics: Option<StatisticsSet>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoData>,
}

/// Snippet fields to change. Anything left unset keeps its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<String>,
}

impl VideoUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }
}

macro_rules! forward {
    ($part:ident => $($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub async fn $name(&self) -> Result<$ty, YtError> {
                Ok(self.$part().await?.$name())
            }
        )*
    };
}

/// One remote video.
///
/// Parts are fetched on first access and kept for the lifetime of the value.
/// Mutations change the cached parts only once the service accepted them.
/// After a successful [`Video::delete`] the value is a tombstone: [`Video::exists`]
/// is false and every remote-backed call fails with [`YtError::Deleted`].
pub struct Video {
    id: Option<String>,
    auth: Arc<Auth>,
    transport: Arc<dyn Transport>,

    snippet: OnceCell<Snippet>,
    status: OnceCell<Status>,
    content_detail: OnceCell<ContentDetail>,
    statistics_set: OnceCell<StatisticsSet>,
    rating: OnceCell<Rating>,
    annotations: OnceCell<Vec<Annotation>>,
}

impl fmt::Debug for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Video")
            .field("id", &self.id)
            .field("auth", &self.auth)
            .field("snippet", &self.snippet.get())
            .field("status", &self.status.get())
            .field("content_detail", &self.content_detail.get())
            .field("statistics_set", &self.statistics_set.get())
            .field("rating", &self.rating.get())
            .finish_non_exhaustive()
    }
}

impl Video {
    pub fn new(id: impl Into<String>, auth: Arc<Auth>, transport: Arc<dyn Transport>) -> Self {
        Self {
            id: Some(id.into()),
            auth,
            transport,
            snippet: OnceCell::new(),
            status: OnceCell::new(),
            content_detail: OnceCell::new(),
            statistics_set: OnceCell::new(),
            rating: OnceCell::new(),
            annotations: OnceCell::new(),
        }
    }

    /// Wraps an already fetched resource; its parts are not requested again.
    pub fn with_data(data: VideoData, auth: Arc<Auth>, transport: Arc<dyn Transport>) -> Self {
        let mut video = Self::new(data.id.clone(), auth, transport);
        video.snippet = OnceCell::new_with(data.snippet);
        video.status = OnceCell::new_with(data.status);
        video.content_detail = OnceCell::new_with(data.content_details);
        video.statistics_set = OnceCell::new_with(data.statistics);
        video
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    fn live_id(&self) -> Result<&str, YtError> {
        self.id.as_deref().ok_or(YtError::Deleted)
    }

    async fn list(&self, part: &str) -> Result<VideoData, YtError> {
        let id = self.live_id()?;
        let request = ApiRequest::get(Endpoint::Data, "videos")
            .query("id", id)
            .query("part", part)
            .auth(&self.auth);
        let body = self.transport.send(request).await?;
        let resp: VideoListResponse = serde_json::from_str(&body)?;
        log::trace!("fetched {} of video {}", part, id);

        resp.items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| YtError::NotFound(id.to_string()))
    }

    fn missing_part(&self, part: &str) -> YtError {
        YtError::NotFound(format!("{} of video {}", part, self.id.as_deref().unwrap_or_default()))
    }

    /// Fetches snippet, status, content details and statistics in one call.
    /// Parts that are already cached keep their value.
    pub async fn preload(&self) -> Result<(), YtError> {
        let data = self.list("snippet,status,contentDetails,statistics").await?;
        fill(&self.snippet, data.snippet);
        fill(&self.status, data.status);
        fill(&self.content_detail, data.content_details);
        fill(&self.statistics_set, data.statistics);

        Ok(())
    }

    pub async fn snippet(&self) -> Result<&Snippet, YtError> {
        self.snippet.get_or_try_init(|| async move {
            match self.list("snippet").await?.snippet {
                Some(snippet) => Ok(snippet),
                None => Err(self.missing_part("snippet")),
            }
        }).await
    }

    pub async fn status(&self) -> Result<&Status, YtError> {
        self.status.get_or_try_init(|| async move {
            match self.list("status").await?.status {
                Some(status) => Ok(status),
                None => Err(self.missing_part("status")),
            }
        }).await
    }

    pub async fn content_detail(&self) -> Result<&ContentDetail, YtError> {
        self.content_detail.get_or_try_init(|| async move {
            match self.list("contentDetails").await?.content_details {
                Some(detail) => Ok(detail),
                None => Err(self.missing_part("contentDetails")),
            }
        }).await
    }

    pub async fn statistics_set(&self) -> Result<&StatisticsSet, YtError> {
        self.statistics_set.get_or_try_init(|| async move {
            match self.list("statistics").await?.statistics {
                Some(statistics) => Ok(statistics),
                None => Err(self.missing_part("statistics")),
            }
        }).await
    }

    pub async fn rating(&self) -> Result<&Rating, YtError> {
        self.rating.get_or_try_init(|| async move {
            rating::fetch(self.transport.as_ref(), &self.auth, self.live_id()?).await
        }).await
    }

    pub async fn annotations(&self) -> Result<&[Annotation], YtError> {
        let annotations = self.annotations.get_or_try_init(|| async move {
            annotation::fetch(self.transport.as_ref(), &self.auth, self.live_id()?).await
        }).await?;

        Ok(annotations.as_slice())
    }

    pub async fn title(&self) -> Result<&str, YtError> {
        Ok(self.snippet().await?.title.as_str())
    }

    pub async fn description(&self) -> Result<&str, YtError> {
        Ok(self.snippet().await?.description.as_str())
    }

    pub async fn tags(&self) -> Result<&[String], YtError> {
        Ok(self.snippet().await?.tags.as_slice())
    }

    pub async fn category_id(&self) -> Result<Option<&str>, YtError> {
        Ok(self.snippet().await?.category_id.as_deref())
    }

    pub async fn channel_id(&self) -> Result<Option<&str>, YtError> {
        Ok(self.snippet().await?.channel_id.as_deref())
    }

    pub async fn channel_title(&self) -> Result<Option<&str>, YtError> {
        Ok(self.snippet().await?.channel_title.as_deref())
    }

    pub async fn live_broadcast_content(&self) -> Result<Option<&str>, YtError> {
        Ok(self.snippet().await?.live_broadcast_content.as_deref())
    }

    pub async fn published_at(&self) -> Result<Option<OffsetDateTime>, YtError> {
        Ok(self.snippet().await?.published_at)
    }

    pub async fn thumbnail_url(&self, size: &str) -> Result<Option<&Url>, YtError> {
        Ok(self.snippet().await?.thumbnail_url(size))
    }

    forward!(status =>
        deleted: bool,
        failed: bool,
        processed: bool,
        rejected: bool,
        uploaded: bool,
        uses_unsupported_codec: bool,
        has_failed_conversion: bool,
        empty: bool,
        invalid: bool,
        too_small: bool,
        aborted: bool,
        claimed: bool,
        infringes_copyright: bool,
        duplicate: bool,
        too_long: bool,
        violates_terms_of_use: bool,
        inappropriate: bool,
        infringes_trademark: bool,
        belongs_to_closed_account: bool,
        belongs_to_suspended_account: bool,
        public: bool,
        private: bool,
        unlisted: bool,
        scheduled: bool,
        scheduled_at: Option<OffsetDateTime>,
        licensed_as_creative_commons: bool,
        licensed_as_standard_youtube: bool,
        embeddable: bool,
        public_stats_viewable: bool,
    );

    forward!(content_detail =>
        hd: bool,
        sd: bool,
        stereoscopic: bool,
        captioned: bool,
        licensed: bool,
    );

    /// Length in seconds.
    pub async fn duration(&self) -> Result<u64, YtError> {
        self.content_detail().await?.duration().await
    }

    pub async fn view_count(&self) -> Result<u64, YtError> {
        Ok(self.statistics_set().await?.view_count)
    }

    pub async fn like_count(&self) -> Result<u64, YtError> {
        Ok(self.statistics_set().await?.like_count)
    }

    pub async fn dislike_count(&self) -> Result<u64, YtError> {
        Ok(self.statistics_set().await?.dislike_count)
    }

    pub async fn favorite_count(&self) -> Result<u64, YtError> {
        Ok(self.statistics_set().await?.favorite_count)
    }

    pub async fn comment_count(&self) -> Result<u64, YtError> {
        Ok(self.statistics_set().await?.comment_count)
    }

    /// Deletes the video. A second call fails with [`YtError::Deleted`]
    /// without contacting the service.
    pub async fn delete(&mut self) -> Result<bool, YtError> {
        let id = self.live_id()?.to_string();
        let request = ApiRequest::new(Method::DELETE, Endpoint::Data, "videos")
            .query("id", id.as_str())
            .authorized(&self.auth);
        self.transport.send(request).await?;
        log::debug!("deleted video {}", id);

        self.id = None;
        Ok(!self.exists())
    }

    /// Rewrites title, description, tags and category.
    ///
    /// Only the snippet is sent; privacy, license, embeddable and publish date
    /// cannot be changed through this call.
    pub async fn update(&mut self, fields: VideoUpdate) -> Result<bool, YtError> {
        let id = self.live_id()?.to_string();
        let current = self.snippet().await?;
        let body = json!({
            "id": id,
            "snippet": {
                "title": fields.title.unwrap_or_else(|| current.title.clone()),
                "description": fields.description.unwrap_or_else(|| current.description.clone()),
                "tags": fields.tags.unwrap_or_else(|| current.tags.clone()),
                "categoryId": fields.category_id.or_else(|| current.category_id.clone()),
            },
        });

        let request = ApiRequest::new(Method::PUT, Endpoint::Data, "videos")
            .query("part", "snippet")
            .json(body)
            .authorized(&self.auth);
        let resp = self.transport.send(request).await?;
        let data: VideoData = serde_json::from_str(&resp)?;
        log::debug!("updated snippet of video {}", data.id);

        self.id = Some(data.id);
        self.snippet = OnceCell::new_with(data.snippet);
        Ok(true)
    }

    pub async fn liked(&self) -> Result<bool, YtError> {
        Ok(*self.rating().await? == Rating::Like)
    }

    pub async fn like(&mut self) -> Result<bool, YtError> {
        self.rate(Rating::Like).await?;
        self.liked().await
    }

    pub async fn dislike(&mut self) -> Result<bool, YtError> {
        self.rate(Rating::Dislike).await?;
        Ok(!self.liked().await?)
    }

    pub async fn unlike(&mut self) -> Result<bool, YtError> {
        self.rate(Rating::None).await?;
        Ok(!self.liked().await?)
    }

    async fn rate(&mut self, value: Rating) -> Result<(), YtError> {
        let id = self.live_id()?.to_string();
        rating::update(self.transport.as_ref(), &self.auth, &id, value).await?;
        self.rating = OnceCell::new_with(Some(value));
        Ok(())
    }

    /// Scope of this video's analytics: the content owner when the identity
    /// has one, otherwise the video's channel.
    ///
    /// Needs the snippet only in the channel case, and fetches it when it is
    /// not cached yet.
    pub async fn report_params(&self) -> Result<ReportParams, YtError> {
        let id = self.live_id()?;
        let ids = match self.auth.owner_name() {
            Some(owner) => format!("contentOwner=={}", owner),
            None => match self.channel_id().await? {
                Some(channel_id) => format!("channel=={}", channel_id),
                None => return Err(self.missing_part("channelId")),
            },
        };

        Ok(ReportParams {
            ids,
            filters: format!("video=={}", id),
        })
    }

    pub async fn report(&self, metric: Metric, range: DateRange) -> Result<TimeSeries, YtError> {
        let params = self.report_params().await?;
        fetch_report(self.transport.as_ref(), &self.auth, metric, &params, range).await
    }
}

// A value that is already cached wins.
fn fill<T>(cell: &OnceCell<T>, value: Option<T>) {
    if let Some(value) = value {
        let _ = cell.set(value);
    }
}
