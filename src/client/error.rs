//! Error types for the hitbox.tv API client.

use reqwest::StatusCode;

use super::response::RawResponse;

/// Errors returned by the hitbox.tv API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error, including failures while reading the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint path could not be resolved against the base URL.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Server answered with anything other than `200 OK`.
    #[error("hitbox.tv api responded with http {}", .0.status.as_u16())]
    UnexpectedStatus(Box<RawResponse>),

    /// Body was not the expected JSON document.
    #[error("failed to decode response: {source}")]
    Decode {
        source: serde_json::Error,
        response: Box<RawResponse>,
    },
}

/// Text that is not a hitbox.tv timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {0:?}, expected yyyy-mm-dd hh:mm:ss")]
pub struct ParseTimestampError(pub(crate) String);

impl Error {
    /// The HTTP response that came with this error, if one was received.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::UnexpectedStatus(response) | Self::Decode { response, .. } => Some(&**response),
            Self::Http(_) | Self::Url(_) => None,
        }
    }

    /// Status code of the received response, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            _ => self.response().map(|r| r.status),
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
