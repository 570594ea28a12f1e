use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BingError {
    /// The HTTP request could not be built, sent, or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned a non-success status code and the body did not decode into
    /// the expected response shape.
    ///
    /// The decode failure is kept as the error source.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// Why the response body could not be decoded.
        #[source]
        source: serde_json::Error,
    },

    /// The body of a successful response did not match the expected JSON shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`BingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request failed to execute.
    Transport,
    /// The request executed but the server answered with a non-success status.
    Status,
    /// The response body did not decode.
    Decode,
}

impl BingError {
    /// Returns which of the three failure classes this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Url(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Json(_) => ErrorKind::Decode,
        }
    }

    /// The HTTP status carried by a [`BingError::Status`], or the status attached to a
    /// `reqwest` error if there is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Url(_) | Self::Json(_) => None,
        }
    }
}
