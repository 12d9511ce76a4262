//! Domain entities.

use chrono::{DateTime, Utc};

use super::value_object::{Color, ConnectionId, MessageId, RoomId};

/// A connection that has joined a room.
///
/// Created by the room registry on join; its color is fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub connection_id: ConnectionId,
    pub display_name: String,
    pub room_id: RoomId,
    pub color: Color,
}

/// A chat message as relayed to a room. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender_name: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub color: Color,
}
