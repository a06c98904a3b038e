use regex::Regex;
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::error::YtError;

static DURATION_REGEX: OnceCell<Regex> = OnceCell::const_new();

async fn duration_regex() -> &'static Regex {
    DURATION_REGEX.get_or_init(|| async {
        Regex::new(r"^P(?:(?P<d>\d+)D)?(?:T(?:(?P<h>\d+)H)?(?:(?P<m>\d+)M)?(?:(?P<s>\d+)S)?)?$").unwrap()
    }).await
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    /// ISO 8601, e.g. `PT1H2M3S`.
    pub duration: String,
    /// `2d` or `3d`.
    pub dimension: Option<String>,
    /// `hd` or `sd`.
    pub definition: Option<String>,
    /// `"true"` or `"false"`, the service sends it as a string.
    pub caption: Option<String>,
    #[serde(default)]
    pub licensed_content: bool,
}

impl ContentDetail {
    /// Length of the video in seconds.
    pub async fn duration(&self) -> Result<u64, YtError> {
        let caps = duration_regex().await
            .captures(&self.duration)
            .ok_or_else(|| YtError::InvalidDuration(self.duration.clone()))?;

        let invalid = || YtError::InvalidDuration(self.duration.clone());
        let part = |name: &str, unit: u64| -> Result<u64, YtError> {
            match caps.name(name) {
                Some(m) => m.as_str()
                    .parse::<u64>()
                    .ok()
                    .and_then(|n| n.checked_mul(unit))
                    .ok_or_else(invalid),
                None => Ok(0),
            }
        };

        [("d", 86_400), ("h", 3_600), ("m", 60), ("s", 1)]
            .into_iter()
            .try_fold(0u64, |total, (name, unit)| {
                total.checked_add(part(name, unit)?).ok_or_else(invalid)
            })
    }

    pub fn hd(&self) -> bool {
        self.definition.as_deref() == Some("hd")
    }

    pub fn sd(&self) -> bool {
        self.definition.as_deref() == Some("sd")
    }

    pub fn stereoscopic(&self) -> bool {
        self.dimension.as_deref() == Some("3d")
    }

    pub fn captioned(&self) -> bool {
        self.caption.as_deref() == Some("true")
    }

    pub fn licensed(&self) -> bool {
        self.licensed_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(duration: &str) -> ContentDetail {
        serde_json::from_value(serde_json::json!({
            "duration": duration,
            "dimension": "2d",
            "definition": "hd",
            "caption": "false",
            "licensedContent": true
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn parses_iso8601_durations() {
        assert_eq!(detail("PT1H2M3S").duration().await.unwrap(), 3723);
        assert_eq!(detail("PT4M13S").duration().await.unwrap(), 253);
        assert_eq!(detail("PT45S").duration().await.unwrap(), 45);
        assert_eq!(detail("P1DT1S").duration().await.unwrap(), 86_401);
        assert_eq!(detail("P0D").duration().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_malformed_durations() {
        let err = detail("4 minutes").duration().await.unwrap_err();
        assert!(matches!(err, YtError::InvalidDuration(d) if d == "4 minutes"));
    }

    #[tokio::test]
    async fn rejects_durations_past_u64() {
        let err = detail("P999999999999999D").duration().await.unwrap_err();
        assert!(matches!(err, YtError::InvalidDuration(d) if d == "P999999999999999D"));

        let err = detail("P213503982334DT18446744073709551615S").duration().await.unwrap_err();
        assert!(matches!(err, YtError::InvalidDuration(_)));
    }

    #[test]
    fn media_flags() {
        let d = detail("PT1S");
        assert!(d.hd());
        assert!(!d.sd());
        assert!(!d.stereoscopic());
        assert!(!d.captioned());
        assert!(d.licensed());
    }
}
