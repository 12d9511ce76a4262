//! WebSocket implementation of `MessagePusher`.
//!
//! The UI layer creates the socket and its outbound queue; this type only
//! holds the queue senders and enqueues encoded frames. A writer task per
//! connection drains the queue into the socket.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, OutboundEvent, PusherChannel},
    infrastructure::dto::conversion::encode_server_event,
};

/// WebSocket `MessagePusher`.
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::default();
/// pusher.register_client(connection_id.clone(), tx).await;
/// pusher.push_to(&connection_id, &OutboundEvent::UserJoined { user: "Bob".into() }).await?;
/// ```
pub struct WebSocketMessagePusher {
    /// Outbound queue of every open connection
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }

    fn encode(event: &OutboundEvent) -> Result<String, MessagePushError> {
        encode_server_event(event).map_err(|e| MessagePushError::Encode(e.to_string()))
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!(
            "Connection '{}' unregistered from MessagePusher",
            connection_id
        );
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(frame)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed '{}' to connection '{}'", event.name(), connection_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &OutboundEvent,
    ) -> Result<(), MessagePushError> {
        let frame = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(&target) {
                // 一部の送信失敗は許容し、残りの宛先への配信を続ける
                Some(sender) => match sender.send(frame.clone()) {
                    Ok(()) => {
                        tracing::debug!("Pushed '{}' to connection '{}'", event.name(), target)
                    }
                    Err(e) => tracing::warn!(
                        "Dropped '{}' for connection '{}': {}",
                        event.name(),
                        target,
                        e
                    ),
                },
                None => tracing::warn!(
                    "Connection '{}' not found during broadcast, skipping",
                    target
                ),
            }
        }

        Ok(())
    }
}
