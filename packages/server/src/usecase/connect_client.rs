//! UseCase: open a connection.

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

pub struct ConnectClientUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// Assign a fresh connection id and register the connection's outbound queue.
    ///
    /// The connection starts unjoined; nothing is broadcast.
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;
        connection_id
    }
}
