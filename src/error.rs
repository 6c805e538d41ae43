use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Network failure, timeout or a request aborted mid-flight.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("search response is missing `allcount`")]
    MissingCount,

    #[error("invalid search parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for failures that happened while talking to the remote service.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status { .. })
    }
}
