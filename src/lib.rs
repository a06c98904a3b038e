
mod error;
mod config;
mod auth;
mod request;
mod snippet;
mod status;
mod content_detail;
mod statistics;
mod rating;
mod annotation;
mod report;
mod video;

pub use error::YtError;
pub use config::Config;
pub use auth::Auth;
pub use request::{ApiRequest, Endpoint, Transport, HttpTransport};
pub use snippet::{Snippet, Thumbnail};
pub use status::{Status, UploadStatus, FailureReason, RejectionReason, PrivacyStatus, License};
pub use content_detail::ContentDetail;
pub use statistics::StatisticsSet;
pub use rating::Rating;
pub use annotation::{Annotation, Link};
pub use report::{fetch_report, Metric, ReportParams, DateRange, TimeSeries};
pub use video::{Video, VideoData, VideoUpdate};

pub use async_trait::async_trait;
pub use reqwest::{Client, Method};
