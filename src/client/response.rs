//! Raw HTTP response metadata handed back alongside results and errors.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

/// An HTTP response with its body read into memory.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Final URL, after any redirects the transport followed.
    pub url: Url,
    pub body: Vec<u8>,
    /// `false` when reading the body failed part way; `body` holds what arrived.
    pub complete: bool,
}

impl RawResponse {
    /// Drain `resp` into memory. Consuming the body releases the connection.
    ///
    /// Status, headers and url are taken before the body is touched, so they
    /// survive a body that fails to read. The failure is returned next to the
    /// partial response.
    pub(crate) async fn read(mut resp: reqwest::Response) -> (Self, Option<reqwest::Error>) {
        let status = resp.status();
        let headers = resp.headers().clone();
        let url = resp.url().clone();

        let mut body = Vec::new();
        let mut error = None;
        loop {
            match resp.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        let raw = Self {
            status,
            headers,
            url,
            body,
            complete: error.is_none(),
        };
        (raw, error)
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
