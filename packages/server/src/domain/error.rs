//! Domain errors.

use thiserror::Error;

/// Errors raised while pushing an event to connections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// No outbound channel is registered for the connection
    #[error("Client '{0}' is not registered")]
    ClientNotFound(String),

    /// The connection's outbound channel is already closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// The event could not be encoded for the wire
    #[error("Failed to encode event: {0}")]
    Encode(String),
}
