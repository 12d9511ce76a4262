//! UseCase: close a connection
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 切断処理（ルームからの削除、残りのメンバーへのロスターと user-left の配信）
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みの接続の切断
//! - エッジケース：最後のメンバーの切断、join 前の切断（配信なし）

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Occupant, RoomRepository};

use super::presence::PresenceBroadcaster;

pub struct DisconnectClientUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    presence: Arc<PresenceBroadcaster>,
}

impl DisconnectClientUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        presence: Arc<PresenceBroadcaster>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            presence,
        }
    }

    /// Forget the connection and, if it had joined a room, announce the
    /// updated roster and a `user-left` notice to that room.
    ///
    /// # Returns
    ///
    /// The removed occupant, or `None` for a connection that never joined
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<Occupant> {
        self.message_pusher.unregister_client(connection_id).await;

        let _sequence = self.presence.sequence().await;
        let occupant = self.repository.leave(connection_id).await?;

        self.presence.announce_roster(&occupant.room_id).await;
        self.presence
            .announce_leave(&occupant.room_id, &occupant.display_name)
            .await;
        tracing::info!("{} left room {}", occupant.display_name, occupant.room_id);

        Some(occupant)
    }
}
