#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use yt_rs::{async_trait, ApiRequest, Auth, Method, Transport, Video, YtError};

pub const VIDEO_ID: &str = "MESycYJytkU";
pub const CHANNEL_ID: &str = "UCxO1tY8h1AhOz0T4ENwmpow";
pub const OWNER_TOKEN: &str = "owner-token";
pub const VIEWER_TOKEN: &str = "viewer-token";

pub const ANNOTATIONS: &str = r#"<document><annotations>
  <annotation id="annotation_1" type="text" style="popup">
    <TEXT>See the playlist</TEXT>
    <segment><movingRegion type="rect">
      <rectRegion x="1" y="1" w="10" h="10" t="0:00:02.0"/>
      <rectRegion x="1" y="1" w="10" h="10" t="0:00:08.0"/>
    </movingRegion></segment>
    <action type="openUrl"><url value="https://www.youtube.com/playlist?list=PLSWYkYzOr" target="new"/></action>
  </annotation>
</annotations></document>"#;

struct State {
    video: Value,
    rating: String,
    deleted: bool,
    rows: Value,
}

/// In-memory stand-in for the remote service, holding a single video.
///
/// Calls that need permission succeed only with [`OWNER_TOKEN`], except
/// reading the rating, which [`VIEWER_TOKEN`] may do as well.
pub struct FakeService {
    state: Mutex<State>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State {
                video: resource(),
                rating: "none".to_string(),
                deleted: false,
                rows: json!([["2014-04-01", 120.0], ["2014-04-03", 45.0]]),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn rating(&self) -> String {
        self.state.lock().unwrap().rating.clone()
    }

    pub fn set_rating(&self, rating: &str) {
        self.state.lock().unwrap().rating = rating.to_string();
    }

    pub fn deleted(&self) -> bool {
        self.state.lock().unwrap().deleted
    }

    pub fn title(&self) -> String {
        self.state.lock().unwrap().video["snippet"]["title"]
            .as_str()
            .unwrap()
            .to_string()
    }

    fn respond(&self, request: &ApiRequest) -> Result<String, YtError> {
        let mut state = self.state.lock().unwrap();
        let body = match (&request.method, request.path.as_str()) {
            (&Method::GET, "videos") => {
                if state.deleted || request.query_value("id") != Some(VIDEO_ID) {
                    json!({ "items": [] })
                } else {
                    let mut item = json!({ "id": VIDEO_ID });
                    for part in request.query_value("part").unwrap_or_default().split(',') {
                        item[part] = state.video[part].clone();
                    }
                    json!({ "items": [item] })
                }
            }
            (&Method::DELETE, "videos") => {
                state.deleted = true;
                return Ok(String::new());
            }
            (&Method::PUT, "videos") => {
                let sent = request.body.clone().unwrap_or_default();
                for key in ["title", "description", "tags", "categoryId"] {
                    state.video["snippet"][key] = sent["snippet"][key].clone();
                }
                json!({ "id": VIDEO_ID, "snippet": state.video["snippet"].clone() })
            }
            (&Method::GET, "videos/getRating") => {
                json!({ "items": [{ "videoId": VIDEO_ID, "rating": state.rating }] })
            }
            (&Method::POST, "videos/rate") => {
                state.rating = request.query_value("rating").unwrap_or_default().to_string();
                return Ok(String::new());
            }
            (&Method::GET, "reports") => json!({
                "kind": "youtubeAnalytics#resultTable",
                "columnHeaders": [
                    { "name": "day", "columnType": "DIMENSION", "dataType": "STRING" },
                    { "name": request.query_value("metrics"), "columnType": "METRIC", "dataType": "INTEGER" }
                ],
                "rows": state.rows.clone()
            }),
            (&Method::GET, "annotations_invideo") => return Ok(ANNOTATIONS.to_string()),
            _ => {
                return Err(YtError::IsNotSuccess {
                    status: reqwest::StatusCode::NOT_FOUND,
                    body: String::new(),
                })
            }
        };

        Ok(body.to_string())
    }
}

#[async_trait]
impl Transport for FakeService {
    async fn send(&self, request: ApiRequest) -> Result<String, YtError> {
        self.requests.lock().unwrap().push(request.clone());

        let permitted = match request.access_token.as_deref() {
            Some(OWNER_TOKEN) => true,
            Some(VIEWER_TOKEN) => request.method == Method::GET && request.path == "videos/getRating",
            _ => false,
        };
        if request.requires_auth && !permitted {
            return Err(YtError::Unauthorized("insufficient permissions".to_string()));
        }
        self.respond(&request)
    }
}

pub fn resource() -> Value {
    json!({
        "kind": "youtube#video",
        "id": VIDEO_ID,
        "snippet": {
            "publishedAt": "2014-03-31T10:00:00Z",
            "channelId": CHANNEL_ID,
            "title": "A YouTube video",
            "description": "What it is about",
            "tags": ["yt", "video"],
            "categoryId": "22",
            "channelTitle": "Fullscreen",
            "liveBroadcastContent": "none"
        },
        "status": {
            "uploadStatus": "processed",
            "privacyStatus": "public",
            "license": "youtube",
            "embeddable": true,
            "publicStatsViewable": true
        },
        "contentDetails": {
            "duration": "PT4M13S",
            "dimension": "2d",
            "definition": "hd",
            "caption": "false",
            "licensedContent": true
        },
        "statistics": {
            "viewCount": "3207",
            "likeCount": "21",
            "dislikeCount": "2",
            "favoriteCount": "0",
            "commentCount": "5"
        }
    })
}

pub fn owner() -> Arc<Auth> {
    Arc::new(Auth::new(OWNER_TOKEN))
}

pub fn viewer() -> Arc<Auth> {
    Arc::new(Auth::new(VIEWER_TOKEN))
}

pub fn video(service: &Arc<FakeService>, auth: Arc<Auth>) -> Video {
    Video::new(VIDEO_ID, auth, service.clone())
}
