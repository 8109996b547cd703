use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum StatusPageError {
    /// The API answered with an `error` field; the text is passed through verbatim.
    #[error("{0}")]
    Remote(String),
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid client setup: {0}")]
    Setup(String),
}

impl StatusPageError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::Remote(_) => "STATUSPAGE_REMOTE_ERROR",
            Self::Http { .. } => "STATUSPAGE_HTTP_STATUS",
            Self::Timeout(_) => "STATUSPAGE_TIMEOUT",
            Self::Transport(_) => "STATUSPAGE_TRANSPORT_ERROR",
            Self::Decode(_) => "STATUSPAGE_DECODE_ERROR",
            Self::Setup(_) => "STATUSPAGE_SETUP_ERROR",
        }
    }
}
