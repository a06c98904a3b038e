use std::fmt;

/// Identity that requests are made on behalf of.
///
/// Passed explicitly to every [`Video`](crate::Video). An `Auth` without an
/// access token can still read public data when the transport carries an API
/// key, but every mutation fails with [`YtError::Unauthorized`](crate::YtError::Unauthorized).
#[derive(Clone, Default)]
pub struct Auth {
    access_token: Option<String>,
    owner_name: Option<String>,
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("owner_name", &self.owner_name)
            .finish()
    }
}

impl Auth {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            owner_name: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Scopes analytics to a content owner instead of the video's channel.
    pub fn with_owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = Some(owner_name.into());
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn owner_name(&self) -> Option<&str> {
        self.owner_name.as_deref()
    }
}
