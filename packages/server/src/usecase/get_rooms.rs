//! UseCase: list rooms.

use std::sync::Arc;

use crate::domain::{RoomRepository, RoomSnapshot};

pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// Every non-empty room, sorted by room id
    pub async fn execute(&self) -> Vec<RoomSnapshot> {
        self.repository.list_rooms().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::testing::TestHarness;

    #[tokio::test]
    async fn test_get_rooms() {
        // テスト項目: 参加者のいるルームの一覧が取得できる
        // given (前提条件):
        let harness = TestHarness::new();
        harness.seat("c1", "B", "Bob").await;
        harness.seat("c2", "A", "Alice").await;
        let usecase = GetRoomsUseCase::new(harness.repository.clone());

        // when (操作):
        let rooms = usecase.execute().await;

        // then (期待する結果):
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }
}
