//! Connection lifecycle.
//!
//! A connection is `Unjoined` when opened and becomes `Joined` on its first
//! `join-room`. Closing consumes the session, so no event can be handled
//! after the connection is closed.
//!
//! Messages are relayed in both states: an unjoined sender is relayed with
//! the fallback color instead of being rejected.

use std::sync::Arc;

use crate::domain::{ConnectionId, InboundEvent, Occupant, PusherChannel, RoomId};

use super::{
    ConnectClientUseCase, DisconnectClientUseCase, JoinRoomUseCase, SendMessageUseCase,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    Unjoined,
    Joined { room_id: RoomId },
}

/// Use cases driven by a connection, created once at server startup.
pub struct ConnectionLifecycle {
    connect_client_usecase: Arc<ConnectClientUseCase>,
    join_room_usecase: Arc<JoinRoomUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
}

impl ConnectionLifecycle {
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        join_room_usecase: Arc<JoinRoomUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    ) -> Self {
        Self {
            connect_client_usecase,
            join_room_usecase,
            send_message_usecase,
            disconnect_client_usecase,
        }
    }

    /// Open a session for a new connection whose outbound queue is `sender`.
    pub async fn open(self: &Arc<Self>, sender: PusherChannel) -> ConnectionSession {
        let connection_id = self.connect_client_usecase.execute(sender).await;
        tracing::info!("Connection '{}' opened", connection_id);

        ConnectionSession {
            connection_id,
            state: ConnectionState::Unjoined,
            lifecycle: Arc::clone(self),
        }
    }
}

/// State of one open connection.
pub struct ConnectionSession {
    connection_id: ConnectionId,
    state: ConnectionState,
    lifecycle: Arc<ConnectionLifecycle>,
}

impl ConnectionSession {
    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Route one inbound event.
    pub async fn handle(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::JoinRoom { room, user } => {
                let occupant = self
                    .lifecycle
                    .join_room_usecase
                    .execute(self.connection_id.clone(), room, user)
                    .await;
                self.state = ConnectionState::Joined {
                    room_id: occupant.room_id,
                };
            }
            InboundEvent::Message {
                room,
                user,
                message,
            } => {
                self.lifecycle
                    .send_message_usecase
                    .execute(&self.connection_id, &room, user, message)
                    .await;
            }
        }
    }

    /// Close the connection: leave its room (announcing it when it had
    /// joined) and drop its outbound queue.
    ///
    /// # Returns
    ///
    /// The occupant that left, if the connection had joined
    pub async fn close(self) -> Option<Occupant> {
        let occupant = self
            .lifecycle
            .disconnect_client_usecase
            .execute(&self.connection_id)
            .await;
        tracing::info!("Connection '{}' closed", self.connection_id);
        occupant
    }
}
