//! hitbox.tv API client
//!
//! Async client for the hitbox.tv REST API, built on reqwest. Requests are
//! unauthenticated; every call resolves a relative path against the client's
//! base URL and decodes the JSON body into typed structures.

pub mod error;
pub mod response;
pub mod types;
pub(crate) mod wire;

mod games;


use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, USER_AGENT as USER_AGENT_HEADER};
use serde::de::DeserializeOwned;
use url::Url;

pub use error::{Error, ParseTimestampError};
pub use response::RawResponse;
pub use types::*;

// ── Defaults ────────────────────────────────────────────────────────────────

macro_rules! library_version {
    () => {
        "0.1"
    };
}

/// Version reported in the default user agent.
pub const LIBRARY_VERSION: &str = library_version!();

/// Base URL of the public hitbox.tv API.
pub const DEFAULT_BASE_URL: &str = "http://api.hitbox.tv/";

/// Default `User-Agent` header, `hitbox/<LIBRARY_VERSION>`.
pub const USER_AGENT: &str = concat!("hitbox/", library_version!());

// ── Client ──────────────────────────────────────────────────────────────────

/// Async client for the hitbox.tv REST API.
///
/// Cloning is cheap and clones share the underlying connection pool. Timeouts,
/// proxies and pooling are configured on the [`reqwest::Client`] handed to
/// [`HitboxClient::with_http_client`].
#[derive(Debug, Clone)]
pub struct HitboxClient {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
}

impl Default for HitboxClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HitboxClient {
    /// Create a client using a default `reqwest::Client`.
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new())
    }

    /// Create a client that sends its requests through `http`.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is a valid URL");
        Self {
            http,
            base_url,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Point the client at a different API root (a mirror, or a mock server).
    ///
    /// Relative paths are resolved against this URL, so a path prefix is only
    /// kept when the URL ends with a `/`.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    // ── HTTP helpers ────────────────────────────────────────────────────

    /// Build a request for `path`, resolved relative to the base URL.
    ///
    /// Paths should be given without a leading slash, otherwise the base URL's
    /// own path is replaced.
    pub(crate) fn new_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::Request, Error> {
        let url = self.base_url.join(path)?;
        let request = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT_HEADER, &self.user_agent)
            .build()?;
        Ok(request)
    }

    /// Send a request and decode a `200 OK` JSON body into `T`.
    ///
    /// The body is read to completion before the status is inspected, so the
    /// connection is released on every path. The raw response is returned with
    /// the decoded value, or attached to the error. A non-200 status wins over
    /// a body that failed to read.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<(T, RawResponse), Error> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let resp = self.http.execute(request).await?;
        let (raw, body_error) = RawResponse::read(resp).await;

        tracing::debug!(status = %raw.status, bytes = raw.body.len(), "received response");

        if raw.status != StatusCode::OK {
            if let Some(err) = &body_error {
                tracing::debug!(error = %err, "error response body cut short");
            }
            tracing::warn!(status = %raw.status, url = %raw.url, "unexpected status");
            return Err(Error::UnexpectedStatus(Box::new(raw)));
        }
        if let Some(err) = body_error {
            return Err(err.into());
        }

        match serde_json::from_slice(&raw.body) {
            Ok(value) => Ok((value, raw)),
            Err(source) => {
                tracing::debug!(error = %source, "failed to decode response body");
                Err(Error::Decode {
                    source,
                    response: Box::new(raw),
                })
            }
        }
    }
}
