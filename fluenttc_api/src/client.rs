//! reqwest-backed [`Caller`] for a TeamCity server.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::{
    config::{ConnectionConfig, Credentials},
    Caller, Error,
};

const USER_AGENT: &str = concat!("fluenttc/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one TeamCity server.
///
/// The underlying `reqwest::Client` is built once with a 30-second timeout
/// and reused for every request made through this value.
pub struct HttpClient {
    /// Scheme and host, e.g. `https://teamcity.example.com`.
    base_url: String,
    credentials: Credentials,
    inner: reqwest::Client,
}

impl HttpClient {
    /// Creates a client from resolved connection settings.
    pub fn new(config: &ConnectionConfig) -> Result<Self, Error> {
        let base_url = config.base_url()?;
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::ClientBuild
            })?;
        Ok(Self {
            base_url,
            credentials: config.credentials.clone(),
            inner,
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let raw = format!(
            "{}{}{}",
            &self.base_url,
            self.credentials.path_prefix(),
            path
        );
        Url::parse(raw.as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, Error> {
        let url = self.get_url(path)?;
        tracing::debug!("{} {}", method, url);
        let builder = self
            .inner
            .request(method, url)
            .header("accept", "application/json");
        Ok(match &self.credentials {
            Credentials::Guest => builder,
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            Credentials::Token(token) => builder.bearer_auth(token),
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, Error> {
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

impl Caller for HttpClient {
    async fn get_text(&self, path: &str) -> Result<String, Error> {
        let request = self.request(Method::GET, path)?;
        self.send(request).await
    }

    async fn put(&self, body: &str, content_type: &str, path: &str) -> Result<(), Error> {
        let request = self
            .request(Method::PUT, path)?
            .header("content-type", content_type)
            .body(body.to_string());
        self.send(request).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let request = self.request(Method::DELETE, path)?;
        self.send(request).await.map(|_| ())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
