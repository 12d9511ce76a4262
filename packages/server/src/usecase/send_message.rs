//! UseCase: relay a chat message
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージの中継（送信者の色の付与、送信者を含むルーム全員への配信）
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済みの送信者からのメッセージ
//! - エッジケース：未参加の送信者（フォールバック色）、別ルームへの非配信

use std::sync::Arc;

use irori_shared::time::Clock;

use crate::domain::{
    ChatMessage, ConnectionId, FALLBACK_COLOR, MessageId, MessagePusher, OutboundEvent, RoomId,
    RoomRepository,
};

/// Message relay
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
        }
    }

    /// Stamp a message and broadcast it to every member of `room_id`,
    /// the sender included.
    ///
    /// The color is the sender's color from its join; a sender that has not
    /// joined gets `FALLBACK_COLOR`. The body is relayed verbatim.
    ///
    /// # Returns
    ///
    /// The message as it was broadcast
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room_id: &RoomId,
        sender_name: String,
        body: String,
    ) -> ChatMessage {
        let color = self
            .repository
            .occupant_of(connection_id)
            .await
            .map(|occupant| occupant.color)
            .unwrap_or(FALLBACK_COLOR);

        let message = ChatMessage {
            id: MessageId::generate(),
            sender_name,
            body,
            timestamp: self.clock.now(),
            color,
        };

        let targets = self
            .repository
            .list_occupants(room_id)
            .await
            .into_iter()
            .map(|o| o.connection_id)
            .collect();

        tracing::info!(
            "Message in {} from {}: {}",
            room_id,
            message.sender_name,
            message.body
        );
        let event = OutboundEvent::Message(message.clone());
        if let Err(e) = self.message_pusher.broadcast(targets, &event).await {
            tracing::warn!("Failed to relay message: {}", e);
        }

        message
    }
}
