use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::auth::Auth;
use crate::config::Config;
use crate::error::YtError;

/// Which service a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Data API (`videos`, `videos/rate`, ...).
    Data,
    /// Analytics API (`reports`).
    Analytics,
    /// The legacy annotations document, which is XML rather than JSON.
    Annotations,
}

/// One call against the remote service, independent of how it is sent.
#[readonly::make]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub access_token: Option<String>,
    /// The call must carry an access token to be permitted.
    pub requires_auth: bool,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: Endpoint, path: impl Into<String>) -> Self {
        Self {
            method,
            endpoint,
            path: path.into(),
            query: Vec::new(),
            body: None,
            access_token: None,
            requires_auth: false,
        }
    }

    pub fn get(endpoint: Endpoint, path: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint, path)
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches the identity's token when it has one.
    pub fn auth(mut self, auth: &Auth) -> Self {
        self.access_token = auth.access_token().map(str::to_string);
        self
    }

    /// Like [`ApiRequest::auth`], but the call is refused without a token.
    pub fn authorized(self, auth: &Auth) -> Self {
        let mut request = self.auth(auth);
        request.requires_auth = true;
        request
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Performs [`ApiRequest`]s.
///
/// Implementations return the response body only for successful calls.
/// A call the identity is not permitted to make must fail with
/// [`YtError::Unauthorized`]; every other failure surfaces as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<String, YtError>;
}

/// [`Transport`] over HTTPS with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Config,
}

impl HttpTransport {
    pub fn new(config: Config) -> Result<Self, YtError> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, YtError> {
        if request.requires_auth && request.access_token.is_none() {
            return Err(YtError::Unauthorized(format!(
                "{} {} requires an access token",
                request.method, request.path
            )));
        }

        let base_url = match request.endpoint {
            Endpoint::Data => &self.config.data_api_url,
            Endpoint::Analytics => &self.config.analytics_api_url,
            Endpoint::Annotations => &self.config.annotations_url,
        };
        let url = base_url.join(&request.path)?;
        log::debug!("{} {}", request.method, url);

        let mut req = self.client
            .request(request.method.clone(), url)
            .query(&request.query);
        match (&request.access_token, &self.config.api_key) {
            (Some(token), _) => req = req.bearer_auth(token),
            (None, Some(key)) => req = req.query(&[("key", key)]),
            (None, None) => {}
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        log::trace!("{} {} -> {}", request.method, request.path, status);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(YtError::Unauthorized(body)),
            s if !s.is_success() => Err(YtError::IsNotSuccess { status: s, body }),
            _ => Ok(body),
        }
    }
}
