use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure talking to the MealDB API.
///
/// An HTTP status other than success is not an error here; the JSON
/// operations report it as "no data" (`Ok(None)`).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("invalid request URL {url}: {reason}")]
    Url { url: String, reason: String },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Network-level failure (DNS, connect, timeout, body read).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// The meal's thumbnail could not be shown.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("meal has no thumbnail URL")]
    MissingUrl,
    #[error("thumbnail unavailable")]
    Fetch(#[from] ApiError),
    #[error("thumbnail unavailable: undecodable image")]
    Decode(#[from] image::ImageError),
}
