//! Presence broadcaster.
//!
//! Emits `users-update` snapshots and `user-joined` / `user-left` notices to
//! the members of a room. It also owns the sequencer that serializes a
//! registry mutation with the announcements it causes: callers hold the guard
//! returned by [`PresenceBroadcaster::sequence`] across both, so a roster
//! snapshot is never overtaken by an older one.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{ConnectionId, MessagePusher, Occupant, OutboundEvent, RoomId, RoomRepository};

pub struct PresenceBroadcaster {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    sequencer: Mutex<()>,
}

impl PresenceBroadcaster {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            sequencer: Mutex::new(()),
        }
    }

    /// Acquire the presence sequencer.
    ///
    /// Held across {registry mutation, roster, notice} for every join and leave.
    pub async fn sequence(&self) -> MutexGuard<'_, ()> {
        self.sequencer.lock().await
    }

    /// Send the room's current roster to every member of the room.
    ///
    /// # Returns
    ///
    /// The roster that was sent
    pub async fn announce_roster(&self, room_id: &RoomId) -> Vec<Occupant> {
        let roster = self.repository.list_occupants(room_id).await;
        let targets = roster.iter().map(|o| o.connection_id.clone()).collect();

        self.broadcast(targets, OutboundEvent::UsersUpdate(roster.clone()))
            .await;
        roster
    }

    /// Tell every member except the joiner that `display_name` joined.
    pub async fn announce_join(&self, room_id: &RoomId, joiner: &ConnectionId, display_name: &str) {
        let targets = self
            .repository
            .list_occupants(room_id)
            .await
            .into_iter()
            .map(|o| o.connection_id)
            .filter(|id| id != joiner)
            .collect();

        self.broadcast(
            targets,
            OutboundEvent::UserJoined {
                user: display_name.to_string(),
            },
        )
        .await;
    }

    /// Tell the remaining members that `display_name` left.
    pub async fn announce_leave(&self, room_id: &RoomId, display_name: &str) {
        let targets = self
            .repository
            .list_occupants(room_id)
            .await
            .into_iter()
            .map(|o| o.connection_id)
            .collect();

        self.broadcast(
            targets,
            OutboundEvent::UserLeft {
                user: display_name.to_string(),
            },
        )
        .await;
    }

    async fn broadcast(&self, targets: Vec<ConnectionId>, event: OutboundEvent) {
        if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
            tracing::warn!("Failed to broadcast '{}': {}", event.name(), e);
        }
    }
}
