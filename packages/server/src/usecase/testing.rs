//! Test fixtures shared by the use case tests.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessagePusher, RoomId, RoomRepository},
    infrastructure::{
        dto::websocket::ServerEvent, message_pusher::WebSocketMessagePusher,
        repository::InMemoryRoomRepository,
    },
};

use super::PresenceBroadcaster;

/// Real repository and pusher wired together, with helpers to open
/// connections without a socket.
pub struct TestHarness {
    pub repository: Arc<InMemoryRoomRepository>,
    pub message_pusher: Arc<WebSocketMessagePusher>,
    pub presence: Arc<PresenceBroadcaster>,
}

impl TestHarness {
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryRoomRepository::default());
        let message_pusher = Arc::new(WebSocketMessagePusher::default());
        let presence = Arc::new(PresenceBroadcaster::new(
            repository.clone(),
            message_pusher.clone(),
        ));
        Self {
            repository,
            message_pusher,
            presence,
        }
    }

    /// Register an outbound queue for `connection_id` and return its receiving end.
    pub async fn connect(&self, connection_id: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.message_pusher
            .register_client(ConnectionId::from(connection_id), tx)
            .await;
        rx
    }

    /// Put a connection into a room directly through the repository, without
    /// any announcement.
    pub async fn seat(&self, connection_id: &str, room: &str, user: &str) {
        self.repository
            .join(
                ConnectionId::from(connection_id),
                RoomId::from(room),
                user.to_string(),
            )
            .await;
    }
}

/// Decode every frame queued so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        events.push(serde_json::from_str(&frame).expect("server frames are valid JSON"));
    }
    events
}

/// Display names of a `users-update` event.
pub fn roster_names(event: &ServerEvent) -> Vec<String> {
    match event {
        ServerEvent::UsersUpdate(users) => users.iter().map(|u| u.name.clone()).collect(),
        other => panic!("expected users-update, got {other:?}"),
    }
}
