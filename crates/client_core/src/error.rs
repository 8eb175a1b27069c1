use shared::error::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to reach catalog endpoint: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog endpoint returned status {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Decode(#[from] ProtocolError),
    #[error("thumbnail fetch failed for '{url}': {reason}")]
    Thumbnail { url: String, reason: String },
}

impl CatalogError {
    /// True when the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
