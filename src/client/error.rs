//! Client error taxonomy
//!
//! Every failure is reported as a [`ClientError`] carrying the operation and
//! the URL that was attempted. The underlying cause is an [`ErrorKind`].

use thiserror::Error;

use crate::api::Route;

/// A failed client operation
#[derive(Debug, Error)]
#[error("{route} request to url={url} failed")]
pub struct ClientError {
    route: Route,
    url: String,
    #[source]
    kind: ErrorKind,
}

impl ClientError {
    pub(crate) fn new(route: Route, url: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            route,
            url: url.into(),
            kind,
        }
    }

    /// Operation that failed
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// URL attempted (the raw, unparsed string when parsing itself failed)
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// What went wrong
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume the error, keeping only its cause
    #[must_use]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// HTTP status when the server answered with something other than 200
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Classified cause of a [`ClientError`]
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Host and route did not form a valid absolute URL
    #[error("failed to parse url")]
    UrlConstruction(#[source] url::ParseError),

    /// Request payload could not be serialized
    #[error("failed to json encode request")]
    Encoding(#[source] serde_json::Error),

    /// Transport-level failure (connect, DNS, TLS, client-side timeout)
    #[error("failed to do request")]
    Network(#[source] reqwest::Error),

    /// The call context was cancelled before the exchange completed
    #[error("request cancelled")]
    Cancelled,

    /// The call context deadline passed before the exchange completed
    #[error("request deadline exceeded")]
    Timeout,

    /// Server was reachable but did not answer 200
    #[error("unexpected status code {status}, expected 200")]
    UnexpectedStatus {
        /// Observed status code
        status: u16,
        /// Response body, read best effort for context
        body: String,
    },

    /// Reading the body of a 200 response failed
    #[error("failed to read response body")]
    Io(#[source] reqwest::Error),

    /// Body was not JSON of the expected shape
    #[error("failed to json decode response body={body}")]
    Decoding {
        /// Raw response body
        body: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },
}

impl ErrorKind {
    /// Whether the call stopped because it was cancelled or ran out of time
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        match self {
            Self::Cancelled | Self::Timeout => true,
            Self::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}
