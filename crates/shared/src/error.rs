use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
