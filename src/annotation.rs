use scraper::{ElementRef, Html, Selector};

use crate::auth::Auth;
use crate::error::YtError;
use crate::request::{ApiRequest, Endpoint, Transport};

/// One in-video annotation.
#[readonly::make]
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: Option<String>,
    /// `text`, `highlight`, `branding`, `promotion`, ...
    pub kind: Option<String>,
    /// `speech`, `popup`, `label`, `title`, ...
    pub style: Option<String>,
    pub text: Option<String>,
    /// Offsets into the video in seconds.
    pub starts_at: Option<f64>,
    pub ends_at: Option<f64>,
    pub link: Option<Link>,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    /// `current` or `new` window.
    pub target: Option<String>,
}

impl Annotation {
    pub fn has_link_to_subscribe(&self) -> bool {
        self.link_url().map_or(false, |url| url.contains("subscription_center"))
    }

    pub fn has_link_to_playlist(&self) -> bool {
        self.link_url().map_or(false, |url| url.contains("/playlist?") || url.contains("list="))
    }

    pub fn has_link_to_same_window(&self) -> bool {
        self.link.as_ref().and_then(|l| l.target.as_deref()) == Some("current")
    }

    pub fn starts_after(&self, seconds: f64) -> bool {
        self.starts_at.map_or(false, |t| t > seconds)
    }

    pub fn starts_before(&self, seconds: f64) -> bool {
        self.starts_at.map_or(false, |t| t < seconds)
    }

    fn link_url(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.url.as_str())
    }
}

pub(crate) async fn fetch(transport: &dyn Transport, auth: &Auth, video_id: &str) -> Result<Vec<Annotation>, YtError> {
    let request = ApiRequest::get(Endpoint::Annotations, "annotations_invideo")
        .query("video_id", video_id)
        .auth(auth);
    let body = transport.send(request).await?;
    let annotations = parse(&body);
    log::debug!("video {} has {} annotations", video_id, annotations.len());

    Ok(annotations)
}

/// Reads `<annotation>` elements in document order.
///
/// The document is loosely structured XML; the HTML parser lowercases
/// element names and closes self-closing regions at their parent's end tag.
pub(crate) fn parse(document: &str) -> Vec<Annotation> {
    let doc = Html::parse_document(document);
    let annotation = Selector::parse("annotation").unwrap();
    let text = Selector::parse("text").unwrap();
    let region = Selector::parse("rectregion, anchoredregion").unwrap();
    let url = Selector::parse("url").unwrap();

    doc.select(&annotation)
        .map(|el| {
            let times = el.select(&region)
                .filter_map(|r| r.value().attr("t"))
                .filter_map(offset)
                .collect::<Vec<_>>();
            let link = el.select(&url).next().and_then(|u| {
                u.value().attr("value").map(|value| Link {
                    url: value.to_string(),
                    target: attr(u, "target"),
                })
            });

            Annotation {
                id: attr(el, "id"),
                kind: attr(el, "type"),
                style: attr(el, "style"),
                text: el.select(&text)
                    .next()
                    .map(|t| t.text().collect::<String>().trim().to_string()),
                starts_at: times.first().copied(),
                ends_at: times.last().copied(),
                link,
            }
        })
        .collect()
}

fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}

// `h:mm:ss.f`, `mm:ss.f` or `ss.f`; `never` has no offset.
fn offset(t: &str) -> Option<f64> {
    t.split(':')
        .map(|part| part.parse::<f64>().ok())
        .try_fold(0.0, |acc, part| part.map(|p| acc * 60.0 + p))
}
