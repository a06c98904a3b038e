use std::collections::BTreeMap;

use parse_display::{Display, FromStr};
use serde::Deserialize;
use time::macros::format_description;
use time::Date;

use crate::auth::Auth;
use crate::error::YtError;
use crate::request::{ApiRequest, Endpoint, Transport};

/// Daily values of one metric, keyed by day.
pub type TimeSeries = BTreeMap<Date, f64>;

/// Reports a video can be queried for, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
#[display(style = "lowercase")]
pub enum Metric {
    Earnings,
    Views,
    Comments,
    Likes,
    Dislikes,
    Shares,
    Impressions,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Earnings,
        Metric::Views,
        Metric::Comments,
        Metric::Likes,
        Metric::Dislikes,
        Metric::Shares,
        Metric::Impressions,
    ];

    /// Name of the metric in the Analytics API.
    pub fn api_name(&self) -> &'static str {
        match self {
            Metric::Earnings => "estimatedRevenue",
            Metric::Views => "views",
            Metric::Comments => "comments",
            Metric::Likes => "likes",
            Metric::Dislikes => "dislikes",
            Metric::Shares => "shares",
            Metric::Impressions => "adImpressions",
        }
    }
}

/// Scope of an analytics query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    /// `channel==<id>` or `contentOwner==<name>`.
    pub ids: String,
    /// `video==<id>`.
    pub filters: String,
}

/// Inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub since: Date,
    pub until: Date,
}

impl DateRange {
    pub fn new(since: Date, until: Date) -> Self {
        Self { since, until }
    }

    /// Every day of the range, in order. Empty if `since` is after `until`.
    pub fn days(&self) -> impl Iterator<Item = Date> + '_ {
        std::iter::successors(Some(self.since), |day| day.next_day())
            .take_while(move |day| *day <= self.until)
    }
}

#[derive(Debug, Deserialize)]
struct ReportResponse {
    #[serde(default)]
    rows: Vec<(String, f64)>,
}

/// Fetches one metric for every day in `range`; days without data are `0.0`.
pub async fn fetch_report(
    transport: &dyn Transport,
    auth: &Auth,
    metric: Metric,
    params: &ReportParams,
    range: DateRange,
) -> Result<TimeSeries, YtError> {
    let format = format_description!("[year]-[month]-[day]");
    let request = ApiRequest::get(Endpoint::Analytics, "reports")
        .query("ids", params.ids.as_str())
        .query("filters", params.filters.as_str())
        .query("metrics", metric.api_name())
        .query("dimensions", "day")
        .query("startDate", range.since.format(format)?)
        .query("endDate", range.until.format(format)?)
        .authorized(auth);
    let body = transport.send(request).await?;
    let resp: ReportResponse = serde_json::from_str(&body)?;

    let mut values = BTreeMap::new();
    for (day, value) in resp.rows {
        values.insert(Date::parse(&day, format)?, value);
    }
    log::debug!("{} report for {} has {} rows", metric, params.filters, values.len());

    Ok(range.days()
        .map(|day| (day, values.get(&day).copied().unwrap_or(0.0)))
        .collect())
}
