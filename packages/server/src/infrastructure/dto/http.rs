//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::UserInfo;

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    /// Display names in roster order
    pub occupants: Vec<String>,
}

/// Response of `GET /api/rooms/{room_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub occupants: Vec<UserInfo>,
}
