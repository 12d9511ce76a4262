//! Room registry: which connection occupies which room.
//!
//! The registry is plain state with synchronous methods; callers provide the
//! locking (see `InMemoryRoomRepository`). Invariants:
//!
//! - a registered connection is in exactly one room's member list
//! - a room's member list keeps join order among the members still present
//! - an occupant's color is decided once, on join

use std::collections::HashMap;

use super::{
    color::assign_color,
    entity::Occupant,
    value_object::{ConnectionId, RoomId},
};

/// Result of a join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    /// The occupant created by this join
    pub occupant: Occupant,
    /// The membership this join replaced, if the connection had already joined
    pub previous: Option<Occupant>,
}

/// A room together with its occupants in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub occupants: Vec<Occupant>,
}

#[derive(Debug, Default)]
pub struct RoomRegistry {
    occupants: HashMap<ConnectionId, Occupant>,
    rooms: HashMap<RoomId, Vec<ConnectionId>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `connection_id` as an occupant of `room_id`.
    ///
    /// A connection that already joined is first removed from its previous
    /// room (last write wins). The color is allocated from the room's
    /// occupant count after that removal.
    pub fn join(
        &mut self,
        connection_id: ConnectionId,
        room_id: RoomId,
        display_name: String,
    ) -> JoinOutcome {
        let previous = self.leave(&connection_id);

        let members = self.rooms.entry(room_id.clone()).or_default();
        let occupant = Occupant {
            connection_id: connection_id.clone(),
            display_name,
            room_id,
            color: assign_color(members.len()),
        };
        members.push(connection_id.clone());
        self.occupants.insert(connection_id, occupant.clone());

        JoinOutcome { occupant, previous }
    }

    /// Remove the connection's membership, returning its last-known data.
    ///
    /// Returns `None` for a connection that never joined.
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Occupant> {
        let occupant = self.occupants.remove(connection_id)?;

        if let Some(members) = self.rooms.get_mut(&occupant.room_id) {
            members.retain(|id| id != connection_id);
            if members.is_empty() {
                self.rooms.remove(&occupant.room_id);
            }
        }

        Some(occupant)
    }

    /// Occupants of a room in join order. Empty for an unknown room.
    pub fn list_occupants(&self, room_id: &RoomId) -> Vec<Occupant> {
        self.rooms
            .get(room_id)
            .map(|members| {
                members
                    .iter()
                    .filter_map(|id| self.occupants.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Connection ids of a room's occupants in join order.
    pub fn member_ids(&self, room_id: &RoomId) -> Vec<ConnectionId> {
        self.rooms.get(room_id).cloned().unwrap_or_default()
    }

    pub fn occupant_of(&self, connection_id: &ConnectionId) -> Option<&Occupant> {
        self.occupants.get(connection_id)
    }

    /// All non-empty rooms, sorted by room id.
    pub fn rooms(&self) -> Vec<RoomSnapshot> {
        let mut rooms: Vec<RoomSnapshot> = self
            .rooms
            .keys()
            .map(|id| RoomSnapshot {
                id: id.clone(),
                occupants: self.list_occupants(id),
            })
            .collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PALETTE;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::from(id)
    }

    fn room(id: &str) -> RoomId {
        RoomId::from(id)
    }

    fn names(occupants: &[Occupant]) -> Vec<&str> {
        occupants.iter().map(|o| o.display_name.as_str()).collect()
    }

    #[test]
    fn test_join_first_occupant() {
        // テスト項目: 最初の参加者がルームに登録され、パレット先頭の色が割り当てられる
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        let outcome = registry.join(conn("c1"), room("ABCD"), "Alice".to_string());

        // then (期待する結果):
        assert_eq!(outcome.previous, None);
        assert_eq!(outcome.occupant.color, PALETTE[0]);
        assert_eq!(outcome.occupant.room_id, room("ABCD"));
        assert_eq!(names(&registry.list_occupants(&room("ABCD"))), vec!["Alice"]);
        assert_eq!(registry.occupant_of(&conn("c1")), Some(&outcome.occupant));
    }

    #[test]
    fn test_join_assigns_colors_in_join_order() {
        // テスト項目: N 番目の参加者に palette[(N-1) mod size] の色が割り当てられる
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        for i in 0..10 {
            registry.join(conn(&format!("c{i}")), room("ABCD"), format!("user{i}"));
        }

        // then (期待する結果):
        let occupants = registry.list_occupants(&room("ABCD"));
        assert_eq!(occupants.len(), 10);
        for (i, occupant) in occupants.iter().enumerate() {
            assert_eq!(occupant.display_name, format!("user{i}"));
            assert_eq!(occupant.color, PALETTE[i % PALETTE.len()]);
        }
    }

    #[test]
    fn test_colors_are_counted_per_room() {
        // テスト項目: 色の割り当ては他のルームの参加者数に影響されない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("A"), "Alice".to_string());
        registry.join(conn("c2"), room("A"), "Bob".to_string());

        // when (操作):
        let outcome = registry.join(conn("c3"), room("B"), "Carol".to_string());

        // then (期待する結果):
        assert_eq!(outcome.occupant.color, PALETTE[0]);
        assert_eq!(names(&registry.list_occupants(&room("A"))), vec!["Alice", "Bob"]);
        assert_eq!(names(&registry.list_occupants(&room("B"))), vec!["Carol"]);
    }

    #[test]
    fn test_rejoin_to_other_room_moves_membership() {
        // テスト項目: 2 回目の join で以前のルームから外れ、最新のルームのみに所属する
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("A"), "Alice".to_string());
        registry.join(conn("c2"), room("A"), "Bob".to_string());

        // when (操作):
        let outcome = registry.join(conn("c1"), room("B"), "Alice2".to_string());

        // then (期待する結果):
        let previous = outcome.previous.expect("previous membership");
        assert_eq!(previous.room_id, room("A"));
        assert_eq!(previous.display_name, "Alice");
        assert_eq!(names(&registry.list_occupants(&room("A"))), vec!["Bob"]);
        assert_eq!(names(&registry.list_occupants(&room("B"))), vec!["Alice2"]);
        assert_eq!(registry.occupant_count(), 2);
    }

    #[test]
    fn test_rejoin_to_same_room_moves_to_end() {
        // テスト項目: 同じルームへの再 join では重複せず、末尾に移動して色が再割り当てされる
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("A"), "Alice".to_string());
        registry.join(conn("c2"), room("A"), "Bob".to_string());

        // when (操作):
        let outcome = registry.join(conn("c1"), room("A"), "Alice".to_string());

        // then (期待する結果):
        assert!(outcome.previous.is_some());
        assert_eq!(outcome.occupant.color, PALETTE[1]);
        assert_eq!(names(&registry.list_occupants(&room("A"))), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_leave_returns_occupant_and_drops_empty_room() {
        // テスト項目: leave で参加者情報が返され、空になったルームは削除される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        let joined = registry.join(conn("c1"), room("A"), "Alice".to_string());

        // when (操作):
        let left = registry.leave(&conn("c1"));

        // then (期待する結果):
        assert_eq!(left, Some(joined.occupant));
        assert!(registry.list_occupants(&room("A")).is_empty());
        assert!(registry.rooms().is_empty());
        assert_eq!(registry.occupant_of(&conn("c1")), None);
    }

    #[test]
    fn test_leave_unknown_connection_is_not_found() {
        // テスト項目: join していない接続の leave は None を返し、状態を変更しない
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("A"), "Alice".to_string());

        // when (操作):
        let left = registry.leave(&conn("ghost"));

        // then (期待する結果):
        assert_eq!(left, None);
        assert_eq!(registry.occupant_count(), 1);
    }

    #[test]
    fn test_leave_keeps_order_of_remaining_members() {
        // テスト項目: 途中の参加者が抜けても残りの参加者の順序は維持される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("A"), "Alice".to_string());
        registry.join(conn("c2"), room("A"), "Bob".to_string());
        registry.join(conn("c3"), room("A"), "Carol".to_string());

        // when (操作):
        registry.leave(&conn("c2"));

        // then (期待する結果):
        assert_eq!(names(&registry.list_occupants(&room("A"))), vec!["Alice", "Carol"]);
        assert_eq!(registry.member_ids(&room("A")), vec![conn("c1"), conn("c3")]);
    }

    #[test]
    fn test_empty_room_id_and_name_are_accepted() {
        // テスト項目: 空文字列のルーム ID・表示名も拒否されずに登録される
        // given (前提条件):
        let mut registry = RoomRegistry::new();

        // when (操作):
        registry.join(conn("c1"), room(""), String::new());

        // then (期待する結果):
        let occupants = registry.list_occupants(&room(""));
        assert_eq!(occupants.len(), 1);
        assert_eq!(occupants[0].display_name, "");
    }

    #[test]
    fn test_rooms_sorted_by_id() {
        // テスト項目: ルーム一覧がルーム ID 順に返される
        // given (前提条件):
        let mut registry = RoomRegistry::new();
        registry.join(conn("c1"), room("ZZ"), "Alice".to_string());
        registry.join(conn("c2"), room("AA"), "Bob".to_string());

        // when (操作):
        let rooms = registry.rooms();

        // then (期待する結果):
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["AA", "ZZ"]);
        assert_eq!(names(&rooms[1].occupants), vec!["Alice"]);
    }
}
