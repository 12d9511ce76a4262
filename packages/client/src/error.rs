//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not open the WebSocket connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An established connection dropped
    #[error("Connection lost")]
    ConnectionLost,

    /// Every reconnection attempt failed
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectExhausted(u32),

    #[error("Failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
}
