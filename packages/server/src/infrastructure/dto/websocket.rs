//! WebSocket event DTOs.
//!
//! Every frame is a JSON text frame holding an adjacently tagged envelope:
//!
//! ```text
//! {"type": "join-room", "payload": {"room": "ABCD", "user": "Alice"}}
//! {"type": "users-update", "payload": [{"id": "...", "name": "Alice", "color": "bg-blue-500", "room": "ABCD"}]}
//! ```

use serde::{Deserialize, Serialize};

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientEvent {
    #[serde(rename = "join-room")]
    JoinRoom(JoinRoomPayload),
    #[serde(rename = "message")]
    Message(SendMessagePayload),
}

/// Payload of `join-room`. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinRoomPayload {
    pub room: String,
    pub user: String,
}

/// Payload of an inbound `message`. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessagePayload {
    pub room: String,
    pub user: String,
    pub message: String,
}

/// Events pushed by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerEvent {
    #[serde(rename = "users-update")]
    UsersUpdate(Vec<UserInfo>),
    #[serde(rename = "user-joined")]
    UserJoined(UserNotice),
    #[serde(rename = "user-left")]
    UserLeft(UserNotice),
    #[serde(rename = "message")]
    Message(ChatMessage),
}

/// One roster entry of `users-update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub color: String,
    pub room: String,
}

/// Payload of `user-joined` and `user-left`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserNotice {
    pub user: String,
}

/// Payload of an outbound `message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub user: String,
    pub message: String,
    /// RFC 3339, UTC, millisecond precision
    pub timestamp: String,
    pub color: String,
}
