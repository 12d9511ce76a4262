//! UseCase: get one room.

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository, RoomSnapshot};

use super::error::GetRoomDetailError;

pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// The room and its roster.
    ///
    /// # Errors
    ///
    /// `RoomNotFound` when nobody occupies the room
    pub async fn execute(&self, room_id: RoomId) -> Result<RoomSnapshot, GetRoomDetailError> {
        let occupants = self.repository.list_occupants(&room_id).await;
        if occupants.is_empty() {
            return Err(GetRoomDetailError::RoomNotFound(room_id.into_string()));
        }

        Ok(RoomSnapshot {
            id: room_id,
            occupants,
        })
    }
}
