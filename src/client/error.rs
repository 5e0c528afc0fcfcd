use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by a single API call. The client never retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response: DNS, refused connection,
    /// timeout, or a body that could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("http status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    /// A 2xx response whose body is not a JSON object.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    /// Status code of an `HttpStatus` failure, or the status attached to a
    /// transport error when reqwest recorded one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => e.status(),
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Decode { .. } => None,
        }
    }
}
