//! Repository trait definition.
//!
//! The use cases depend on this interface; the infrastructure layer provides
//! the implementation (dependency inversion). Every method is atomic with
//! respect to the others.

use async_trait::async_trait;

use super::{
    entity::Occupant,
    registry::{JoinOutcome, RoomSnapshot},
    value_object::{ConnectionId, RoomId},
};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Join a room, replacing any earlier membership of the connection
    async fn join(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        display_name: String,
    ) -> JoinOutcome;

    /// Remove the connection's membership, if any
    async fn leave(&self, connection_id: &ConnectionId) -> Option<Occupant>;

    /// Current occupants of a room in roster order
    async fn list_occupants(&self, room_id: &RoomId) -> Vec<Occupant>;

    /// The occupant record of a connection, if it has joined
    async fn occupant_of(&self, connection_id: &ConnectionId) -> Option<Occupant>;

    /// All non-empty rooms
    async fn list_rooms(&self) -> Vec<RoomSnapshot>;
}
