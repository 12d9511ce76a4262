//! InMemory Room Repository implementation.
//!
//! Implements the domain's `RoomRepository` trait on top of a `RoomRegistry`
//! guarded by a single mutex, so every operation is atomic.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, JoinOutcome, Occupant, RoomId, RoomRegistry, RoomRepository, RoomSnapshot,
};

/// In-memory room repository.
///
/// The registry is created at server startup and lives as long as the
/// repository.
pub struct InMemoryRoomRepository {
    registry: Arc<Mutex<RoomRegistry>>,
}

impl InMemoryRoomRepository {
    pub fn new(registry: Arc<Mutex<RoomRegistry>>) -> Self {
        Self { registry }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(RoomRegistry::new())))
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        display_name: String,
    ) -> JoinOutcome {
        let mut registry = self.registry.lock().await;
        registry.join(connection_id, room_id, display_name)
    }

    async fn leave(&self, connection_id: &ConnectionId) -> Option<Occupant> {
        let mut registry = self.registry.lock().await;
        registry.leave(connection_id)
    }

    async fn list_occupants(&self, room_id: &RoomId) -> Vec<Occupant> {
        let registry = self.registry.lock().await;
        registry.list_occupants(room_id)
    }

    async fn occupant_of(&self, connection_id: &ConnectionId) -> Option<Occupant> {
        let registry = self.registry.lock().await;
        registry.occupant_of(connection_id).cloned()
    }

    async fn list_rooms(&self) -> Vec<RoomSnapshot> {
        let registry = self.registry.lock().await;
        registry.rooms()
    }
}
