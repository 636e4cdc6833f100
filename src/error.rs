//! Crate-level error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The single connection attempt failed. There is no retry; the caller
    /// gets one session per process.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    #[error("config file {path}: {reason}")]
    Config { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
