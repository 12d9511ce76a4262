//! Events exchanged with a connection, independent of how they are framed on
//! the wire.

use super::{
    entity::{ChatMessage, Occupant},
    value_object::RoomId,
};

/// Events a client sends to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `join-room`
    JoinRoom { room: RoomId, user: String },
    /// `message`
    Message {
        room: RoomId,
        user: String,
        message: String,
    },
}

/// Events the server pushes to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// `users-update`: full roster snapshot of a room
    UsersUpdate(Vec<Occupant>),
    /// `user-joined`
    UserJoined { user: String },
    /// `user-left`
    UserLeft { user: String },
    /// `message`
    Message(ChatMessage),
}

impl OutboundEvent {
    /// Event name as seen by clients.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UsersUpdate(_) => "users-update",
            Self::UserJoined { .. } => "user-joined",
            Self::UserLeft { .. } => "user-left",
            Self::Message(_) => "message",
        }
    }
}
