//! MessagePusher trait definition.
//!
//! Abstracts how events reach connections. The WebSocket implementation lives
//! in `infrastructure::message_pusher`.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::OutboundEvent, value_object::ConnectionId};

/// Outbound queue of one connection, carrying encoded frames
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register the outbound channel of a newly opened connection
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// Forget the outbound channel of a closed connection
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// Push an event to a single connection
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;

    /// Push an event to every target.
    ///
    /// Delivery failures for individual targets are logged and skipped; only a
    /// failure to encode the event is returned.
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError>;
}
