//! UseCase: join a room
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - ルームへの参加（色の割り当て、ロスターと user-joined の配信）
//!
//! ### どのような状況を想定しているか
//! - 正常系：1 人目・2 人目の参加
//! - エッジケース：別ルームへの再 join（ルーム移動）、同じルームへの再 join

use std::sync::Arc;

use crate::domain::{ConnectionId, Occupant, RoomId, RoomRepository};

use super::presence::PresenceBroadcaster;

pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    presence: Arc<PresenceBroadcaster>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, presence: Arc<PresenceBroadcaster>) -> Self {
        Self {
            repository,
            presence,
        }
    }

    /// Join `room_id` as `display_name`.
    ///
    /// A connection that already joined leaves its previous room first; when
    /// that room differs, it receives its updated roster and a `user-left`
    /// notice. Then the new room receives its roster and, except for the
    /// joiner, a `user-joined` notice.
    ///
    /// # Returns
    ///
    /// The new occupant record
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        display_name: String,
    ) -> Occupant {
        let _sequence = self.presence.sequence().await;

        let outcome = self
            .repository
            .join(connection_id.clone(), room_id.clone(), display_name.clone())
            .await;

        if let Some(previous) = &outcome.previous
            && previous.room_id != room_id
        {
            self.presence.announce_roster(&previous.room_id).await;
            self.presence
                .announce_leave(&previous.room_id, &previous.display_name)
                .await;
            tracing::info!("{} left room {}", previous.display_name, previous.room_id);
        }

        self.presence.announce_roster(&room_id).await;
        self.presence
            .announce_join(&room_id, &connection_id, &display_name)
            .await;
        tracing::info!("{} joined room {}", display_name, room_id);

        outcome.occupant
    }
}
