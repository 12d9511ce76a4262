//! Conversion logic between DTOs and domain types.

use irori_shared::time::to_rfc3339_millis;

use crate::domain::{
    ChatMessage, InboundEvent, Occupant, OutboundEvent, RoomId, RoomSnapshot,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientEvent> for InboundEvent {
    fn from(event: dto::ClientEvent) -> Self {
        match event {
            dto::ClientEvent::JoinRoom(payload) => Self::JoinRoom {
                room: RoomId::from(payload.room),
                user: payload.user,
            },
            dto::ClientEvent::Message(payload) => Self::Message {
                room: RoomId::from(payload.room),
                user: payload.user,
                message: payload.message,
            },
        }
    }
}

/// Decode a text frame into an inbound event
pub fn decode_client_event(text: &str) -> Result<InboundEvent, serde_json::Error> {
    serde_json::from_str::<dto::ClientEvent>(text).map(InboundEvent::from)
}

// ========================================
// Domain → DTO
// ========================================

impl From<&Occupant> for dto::UserInfo {
    fn from(occupant: &Occupant) -> Self {
        Self {
            id: occupant.connection_id.as_str().to_string(),
            name: occupant.display_name.clone(),
            color: occupant.color.as_str().to_string(),
            room: occupant.room_id.as_str().to_string(),
        }
    }
}

impl From<&ChatMessage> for dto::ChatMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            user: message.sender_name.clone(),
            message: message.body.clone(),
            timestamp: to_rfc3339_millis(&message.timestamp),
            color: message.color.as_str().to_string(),
        }
    }
}

impl From<&OutboundEvent> for dto::ServerEvent {
    fn from(event: &OutboundEvent) -> Self {
        match event {
            OutboundEvent::UsersUpdate(occupants) => {
                Self::UsersUpdate(occupants.iter().map(dto::UserInfo::from).collect())
            }
            OutboundEvent::UserJoined { user } => {
                Self::UserJoined(dto::UserNotice { user: user.clone() })
            }
            OutboundEvent::UserLeft { user } => {
                Self::UserLeft(dto::UserNotice { user: user.clone() })
            }
            OutboundEvent::Message(message) => Self::Message(message.into()),
        }
    }
}

/// Encode an outbound event as a text frame
pub fn encode_server_event(event: &OutboundEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dto::ServerEvent::from(event))
}

impl From<&RoomSnapshot> for http::RoomSummaryDto {
    fn from(room: &RoomSnapshot) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            occupants: room
                .occupants
                .iter()
                .map(|o| o.display_name.clone())
                .collect(),
        }
    }
}

impl From<&RoomSnapshot> for http::RoomDetailDto {
    fn from(room: &RoomSnapshot) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            occupants: room.occupants.iter().map(dto::UserInfo::from).collect(),
        }
    }
}
